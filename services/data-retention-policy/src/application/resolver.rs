//! 策略解析与映射
//!
//! 根据声明的策略变体选择远端调用，并把远端读取结果映射回变体。
//! 每个操作只发起一次远端调用，失败立即返回，不重试。

use std::sync::Arc;

use retention_common::PolicyScope;
use retention_domain::{DeclaredPolicy, ImportId, PolicyRecord, PolicyVariant, resolve_scope};
use retention_errors::{AppError, AppResult};
use retention_ports::{DeleteOlderSetOptions, PolicyChoice, RetentionPolicyApi};
use retention_telemetry::record_remote_call;
use tracing::{debug, warn};

const OP_SET_DELETE_OLDER: &str = "set_delete_older";
const OP_SET_DONT_DELETE: &str = "set_dont_delete";
const OP_READ_POLICY_CHOICE: &str = "read_policy_choice";

/// 远端读取结果映射为策略变体，一次只有一个分支被填充
pub fn variant_from_choice(choice: &PolicyChoice) -> PolicyVariant {
    match choice {
        PolicyChoice::DeleteOlder(policy) | PolicyChoice::Legacy(policy) => {
            PolicyVariant::DeleteOlderThan {
                days: policy.delete_older_than_n_days,
            }
        }
        PolicyChoice::DontDelete(_) => PolicyVariant::DontDelete,
        PolicyChoice::None => PolicyVariant::Absent,
    }
}

/// 策略解析器
pub struct PolicyResolver {
    client: Arc<dyn RetentionPolicyApi>,
}

impl PolicyResolver {
    pub fn new(client: Arc<dyn RetentionPolicyApi>) -> Self {
        Self { client }
    }

    /// 解析作用域：工作空间优先，其次声明的组织，最后 provider 默认组织
    pub fn resolve_scope(
        &self,
        declared_organization: Option<&str>,
        declared_workspace_id: Option<&str>,
        provider_default_organization: Option<&str>,
    ) -> AppResult<PolicyScope> {
        resolve_scope(
            declared_organization,
            declared_workspace_id,
            provider_default_organization,
        )
    }

    /// 在作用域上设置策略
    pub async fn apply(
        &self,
        scope: &PolicyScope,
        policy: DeclaredPolicy,
    ) -> AppResult<PolicyRecord> {
        debug!(%scope, %policy, "Creating data retention policy");

        let id = match policy {
            DeclaredPolicy::DeleteOlderThan { days } => {
                let options = DeleteOlderSetOptions {
                    delete_older_than_n_days: days,
                };
                let result = self.client.set_delete_older(scope, options).await;
                let remote = self.observe(scope, OP_SET_DELETE_OLDER, result)?;
                if remote.delete_older_than_n_days != days {
                    warn!(
                        %scope,
                        requested = days,
                        returned = remote.delete_older_than_n_days,
                        "Remote returned a different day count"
                    );
                }
                remote.id
            }
            DeclaredPolicy::DontDelete => {
                let result = self.client.set_dont_delete(scope).await;
                self.observe(scope, OP_SET_DONT_DELETE, result)?.id
            }
        };

        debug!(%scope, %id, "Data retention policy created");
        Ok(PolicyRecord::new(id, scope.clone(), policy))
    }

    /// 读取作用域上当前生效的策略变体
    pub async fn read(&self, scope: &PolicyScope) -> AppResult<PolicyVariant> {
        Ok(variant_from_choice(&self.fetch(scope).await?))
    }

    /// 读取策略记录；远端未设置策略时返回 None
    pub async fn read_record(&self, scope: &PolicyScope) -> AppResult<Option<PolicyRecord>> {
        let choice = self.fetch(scope).await?;
        let variant = variant_from_choice(&choice);

        Ok(match (choice.policy_id(), variant.declared()) {
            (Some(id), Some(policy)) => Some(PolicyRecord::new(id.clone(), scope.clone(), policy)),
            _ => None,
        })
    }

    /// 解析 `<ORGANIZATION>/<POLICY ID>` 形式的导入 ID
    pub fn import_identity(&self, raw: &str) -> AppResult<ImportId> {
        ImportId::parse(raw)
    }

    async fn fetch(&self, scope: &PolicyScope) -> AppResult<PolicyChoice> {
        debug!(%scope, "Reading data retention policy");
        let result = self.client.read_policy_choice(scope).await;
        self.observe(scope, OP_READ_POLICY_CHOICE, result)
    }

    /// 记录远端调用结果，失败包装为 Remote 错误
    fn observe<T>(
        &self,
        scope: &PolicyScope,
        operation: &'static str,
        result: AppResult<T>,
    ) -> AppResult<T> {
        record_remote_call(operation, scope.kind().as_str(), result.is_ok());

        result.map_err(|cause| {
            warn!(%scope, operation, error = %cause, "Remote call failed");
            AppError::remote(format!("{}.{}", scope.kind(), operation), cause)
        })
    }
}
