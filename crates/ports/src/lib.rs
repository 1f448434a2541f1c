//! retention-ports - 抽象 trait 层
//!
//! 定义远端数据保留策略 API 的抽象接口

mod retention_api;

pub use retention_api::*;
