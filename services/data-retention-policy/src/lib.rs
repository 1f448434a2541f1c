//! data-retention-policy - 数据保留策略资源
//!
//! - `application`：策略解析与映射（选择远端调用、把读取结果映射回变体）
//! - `api`：面向宿主框架的资源生命周期、状态模型与 schema

pub mod api;
pub mod application;

pub use api::{
    DataRetentionPolicyResource, Lifecycle, PlanModification, PolicyState, ReadOutcome,
};
pub use application::PolicyResolver;
pub use retention_bootstrap::ConfiguredClient;
