//! 数据保留策略资源
//!
//! 宿主框架的 Create / Read / Update / Delete / Import 回调。

use retention_bootstrap::ConfiguredClient;
use retention_errors::{AppError, AppResult};
use tracing::{info, instrument, warn};

use super::model::PolicyState;
use super::plan::{PlanModification, modify_plan};
use super::schema::{Schema, data_retention_policy_schema};
use crate::application::PolicyResolver;

const TYPE_NAME_SUFFIX: &str = "_data_retention_policy";

/// Read 的结果
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Present(PolicyState),
    /// 远端已不存在策略，宿主应从 state 中移除资源
    Removed,
}

/// 数据保留策略资源
pub struct DataRetentionPolicyResource {
    resolver: PolicyResolver,
    default_organization: Option<String>,
}

impl DataRetentionPolicyResource {
    pub fn new(configured: ConfiguredClient) -> Self {
        Self {
            resolver: PolicyResolver::new(configured.client),
            default_organization: configured.organization,
        }
    }

    /// 资源类型名：`<provider>_data_retention_policy`
    pub fn type_name(provider_type_name: &str) -> String {
        format!("{}{}", provider_type_name, TYPE_NAME_SUFFIX)
    }

    pub fn schema(&self) -> Schema {
        data_retention_policy_schema()
    }

    pub fn default_organization(&self) -> Option<&str> {
        self.default_organization.as_deref()
    }

    /// 校验配置：策略块恰好一个，天数合法
    pub fn validate_config(&self, config: &PolicyState) -> AppResult<()> {
        config.declared_policy().map(|_| ())
    }

    #[instrument(skip(self, plan), fields(workspace_id = ?plan.workspace_id))]
    pub async fn create(&self, plan: &PolicyState) -> AppResult<PolicyState> {
        let policy = plan.declared_policy()?;
        let scope = self.resolver.resolve_scope(
            plan.organization.as_deref(),
            plan.workspace_id.as_deref(),
            self.default_organization(),
        )?;

        let record = self.resolver.apply(&scope, policy).await?;
        Ok(PolicyState::from_record(&record, plan.organization.clone()))
    }

    /// 重新读取远端策略；远端未设置策略时返回 `Removed`
    #[instrument(skip(self, state), fields(id = ?state.id))]
    pub async fn read(&self, state: &PolicyState) -> AppResult<ReadOutcome> {
        let scope = self.resolver.resolve_scope(
            state.organization.as_deref(),
            state.workspace_id.as_deref(),
            self.default_organization(),
        )?;

        match self.resolver.read_record(&scope).await? {
            Some(record) => {
                if state.id.as_deref().is_some_and(|id| id != record.id.as_str()) {
                    info!(
                        %scope,
                        previous = ?state.id,
                        current = %record.id,
                        "Data retention policy was replaced remotely"
                    );
                }
                Ok(ReadOutcome::Present(PolicyState::from_record(
                    &record,
                    state.organization.clone(),
                )))
            }
            None => {
                warn!(%scope, "Data retention policy no longer exists, removing from state");
                Ok(ReadOutcome::Removed)
            }
        }
    }

    /// 策略不支持原地更新，任何变更都由 plan 修正转为重建
    pub async fn update(&self, _prior: &PolicyState, _plan: &PolicyState) -> AppResult<PolicyState> {
        Err(AppError::unsupported_operation(
            "Data retention policies cannot be updated in place; changes require replacement",
        ))
    }

    /// 不发起远端调用，远端策略随组织或工作空间一起删除
    pub async fn delete(&self, state: &PolicyState) -> AppResult<()> {
        info!(
            id = ?state.id,
            organization = ?state.organization,
            workspace_id = ?state.workspace_id,
            "Removing data retention policy from state; the remote policy is left in place"
        );
        Ok(())
    }

    /// 由 `<ORGANIZATION>/<POLICY ID>` 构建初始状态，后续由 Read 补全
    pub fn import_state(&self, raw: &str) -> AppResult<PolicyState> {
        let import = self.resolver.import_identity(raw)?;
        Ok(PolicyState {
            id: Some(import.id.to_string()),
            ..PolicyState::for_organization(import.organization.as_str())
        })
    }

    pub fn modify_plan(
        &self,
        prior: Option<&PolicyState>,
        config: &PolicyState,
        plan: &PolicyState,
    ) -> PlanModification {
        modify_plan(prior, config, plan, self.default_organization())
    }
}
