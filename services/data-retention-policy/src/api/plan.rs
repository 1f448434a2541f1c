//! Plan 修正
//!
//! 策略记录不可原地更新，任何变更都必须销毁重建。

use tracing::debug;

use super::model::PolicyState;

pub const ATTR_ORGANIZATION: &str = "organization";
pub const ATTR_WORKSPACE_ID: &str = "workspace_id";
pub const ATTR_DELETE_OLDER_THAN: &str = "delete_older_than";
pub const ATTR_DONT_DELETE: &str = "dont_delete";

/// 修正后的 plan 与需要重建的属性
#[derive(Debug, Clone, PartialEq)]
pub struct PlanModification {
    pub plan: PolicyState,
    pub requires_replace: Vec<&'static str>,
}

impl PlanModification {
    pub fn requires_replace(&self) -> bool {
        !self.requires_replace.is_empty()
    }
}

/// 修正 plan
///
/// - 新建资源（无 prior state）原样返回
/// - `id` 沿用 prior state
/// - 资源未声明组织且按组织寻址时，provider 默认组织变化会改写 plan 并要求重建
/// - 其他属性与 prior state 不同时要求重建
pub fn modify_plan(
    prior: Option<&PolicyState>,
    config: &PolicyState,
    plan: &PolicyState,
    provider_default_organization: Option<&str>,
) -> PlanModification {
    let mut planned = plan.clone();
    let mut requires_replace = Vec::new();

    let Some(prior) = prior else {
        return PlanModification {
            plan: planned,
            requires_replace,
        };
    };

    planned.id = prior.id.clone();

    if config.organization.is_none() && planned.workspace_id.is_none() {
        let current = planned
            .organization
            .clone()
            .or_else(|| prior.organization.clone());

        match (current, provider_default_organization) {
            (Some(current), Some(default)) if current != default => {
                debug!(
                    from = %current,
                    to = default,
                    "Provider default organization changed"
                );
                planned.organization = Some(default.to_string());
            }
            (current, _) => planned.organization = current,
        }
    }

    if planned.organization != prior.organization {
        requires_replace.push(ATTR_ORGANIZATION);
    }
    if planned.workspace_id != prior.workspace_id {
        requires_replace.push(ATTR_WORKSPACE_ID);
    }
    if planned.delete_older_than != prior.delete_older_than {
        requires_replace.push(ATTR_DELETE_OLDER_THAN);
    }
    if planned.dont_delete != prior.dont_delete {
        requires_replace.push(ATTR_DONT_DELETE);
    }

    PlanModification {
        plan: planned,
        requires_replace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prior_org(org: &str) -> PolicyState {
        PolicyState {
            id: Some("drp-1".to_string()),
            ..PolicyState::for_organization(org).with_delete_older_than(30)
        }
    }

    fn config_without_org() -> PolicyState {
        PolicyState::default().with_delete_older_than(30)
    }

    #[test]
    fn test_create_is_untouched() {
        let config = PolicyState::for_organization("acme").with_dont_delete();
        let result = modify_plan(None, &config, &config, Some("globex"));
        assert_eq!(result.plan, config);
        assert!(!result.requires_replace());
    }

    #[test]
    fn test_unchanged_plan_keeps_id_and_org() {
        let prior = prior_org("acme");
        let result = modify_plan(Some(&prior), &config_without_org(), &config_without_org(), Some("acme"));

        assert_eq!(result.plan, prior);
        assert!(!result.requires_replace());
    }

    #[test]
    fn test_default_organization_change_forces_replace() {
        let prior = prior_org("acme");
        let result = modify_plan(Some(&prior), &config_without_org(), &config_without_org(), Some("globex"));

        assert_eq!(result.plan.organization.as_deref(), Some("globex"));
        assert_eq!(result.requires_replace, vec![ATTR_ORGANIZATION]);
    }

    #[test]
    fn test_declared_organization_ignores_default() {
        let prior = prior_org("acme");
        let config = PolicyState::for_organization("acme").with_delete_older_than(30);
        let result = modify_plan(Some(&prior), &config, &config, Some("globex"));

        assert!(!result.requires_replace());
    }

    #[test]
    fn test_policy_change_forces_replace() {
        let prior = prior_org("acme");
        let config = PolicyState::for_organization("acme").with_dont_delete();
        let result = modify_plan(Some(&prior), &config, &config, None);

        assert_eq!(
            result.requires_replace,
            vec![ATTR_DELETE_OLDER_THAN, ATTR_DONT_DELETE]
        );
    }

    #[test]
    fn test_days_change_forces_replace() {
        let prior = prior_org("acme");
        let config = PolicyState::for_organization("acme").with_delete_older_than(60);
        let result = modify_plan(Some(&prior), &config, &config, None);

        assert_eq!(result.requires_replace, vec![ATTR_DELETE_OLDER_THAN]);
    }

    #[test]
    fn test_workspace_scope_not_affected_by_default_organization() {
        let prior = PolicyState {
            id: Some("drp-2".to_string()),
            ..PolicyState::for_workspace("ws-1").with_dont_delete()
        };
        let config = PolicyState::for_workspace("ws-1").with_dont_delete();
        let result = modify_plan(Some(&prior), &config, &config, Some("globex"));

        assert!(result.plan.organization.is_none());
        assert!(!result.requires_replace());

        let moved = PolicyState::for_workspace("ws-2").with_dont_delete();
        let result = modify_plan(Some(&prior), &moved, &moved, None);
        assert_eq!(result.requires_replace, vec![ATTR_WORKSPACE_ID]);
    }
}
