//! 作用域解析

use retention_common::PolicyScope;
use retention_errors::{AppError, AppResult};

/// 解析策略作用域
///
/// 声明了 `workspace_id` 时只按工作空间寻址，组织不参与；否则使用声明的组织，
/// 再退回 provider 默认组织。空白字符串视为未声明，其余值原样用于寻址。
pub fn resolve_scope(
    declared_organization: Option<&str>,
    declared_workspace_id: Option<&str>,
    provider_default_organization: Option<&str>,
) -> AppResult<PolicyScope> {
    if let Some(workspace_id) = non_empty(declared_workspace_id) {
        return Ok(PolicyScope::workspace(workspace_id));
    }

    non_empty(declared_organization)
        .or_else(|| non_empty(provider_default_organization))
        .map(PolicyScope::organization)
        .ok_or_else(|| {
            AppError::configuration(
                "No organization was specified on the resource or provider, and no workspace_id was given",
            )
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
