//! 数据保留策略远端 API trait 定义
//!
//! 远端有两组平行的 API：组织级和工作空间级。调用哪一组由 [`PolicyScope`] 决定。

use async_trait::async_trait;
use retention_common::{PolicyId, PolicyScope};
use retention_errors::AppResult;
use serde::{Deserialize, Serialize};

/// "删除早于 N 天的数据" 设置参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOlderSetOptions {
    pub delete_older_than_n_days: u32,
}

/// 远端返回的 delete-older 策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDeleteOlder {
    pub id: PolicyId,
    pub delete_older_than_n_days: u32,
}

/// 远端返回的 dont-delete 策略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDontDelete {
    pub id: PolicyId,
}

/// 读取策略时远端可能返回的结果，一次最多一种
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicyChoice {
    DeleteOlder(RemoteDeleteOlder),
    DontDelete(RemoteDontDelete),
    /// 旧版策略类型，只能表达 delete-older
    Legacy(RemoteDeleteOlder),
    /// 远端未设置策略
    None,
}

impl PolicyChoice {
    pub fn policy_id(&self) -> Option<&PolicyId> {
        match self {
            Self::DeleteOlder(p) | Self::Legacy(p) => Some(&p.id),
            Self::DontDelete(p) => Some(&p.id),
            Self::None => None,
        }
    }
}

/// 远端数据保留策略 API
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait RetentionPolicyApi: Send + Sync {
    /// 设置 "删除早于 N 天的数据"
    async fn set_delete_older(
        &self,
        scope: &PolicyScope,
        options: DeleteOlderSetOptions,
    ) -> AppResult<RemoteDeleteOlder>;

    /// 设置 "永不删除"
    async fn set_dont_delete(&self, scope: &PolicyScope) -> AppResult<RemoteDontDelete>;

    /// 读取当前生效的策略
    async fn read_policy_choice(&self, scope: &PolicyScope) -> AppResult<PolicyChoice>;
}
