//! retention-domain - 数据保留策略领域核心
//!
//! 策略变体、策略记录、作用域解析、导入 ID 与天数校验

mod days;
mod import;
mod policy;
mod scope;

pub use days::*;
pub use import::*;
pub use policy::*;
pub use scope::*;

// Re-export common types
pub use retention_common::{OrganizationName, PolicyId, PolicyScope, ScopeKind, WorkspaceId};
