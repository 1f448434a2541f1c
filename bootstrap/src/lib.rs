//! retention-bootstrap - 统一启动骨架
//!
//! 加载 provider 配置、初始化遥测、构建远端客户端

mod client;
mod runtime;

pub use client::*;
pub use runtime::*;
