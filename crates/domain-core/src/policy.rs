//! 策略变体与策略记录

use retention_common::{PolicyId, PolicyScope};
use serde::{Deserialize, Serialize};

/// 可声明的策略：二者必居其一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredPolicy {
    DeleteOlderThan { days: u32 },
    DontDelete,
}

impl DeclaredPolicy {
    pub fn delete_older_than(days: u32) -> Self {
        Self::DeleteOlderThan { days }
    }
}

impl std::fmt::Display for DeclaredPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        PolicyVariant::from(*self).fmt(f)
    }
}

/// 策略变体（读取结果）
///
/// `Absent` 表示远端未设置任何策略，只会由读取产生。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyVariant {
    DeleteOlderThan { days: u32 },
    DontDelete,
    Absent,
}

impl PolicyVariant {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// 转回可声明的策略；`Absent` 返回 None
    pub fn declared(&self) -> Option<DeclaredPolicy> {
        match *self {
            Self::DeleteOlderThan { days } => Some(DeclaredPolicy::DeleteOlderThan { days }),
            Self::DontDelete => Some(DeclaredPolicy::DontDelete),
            Self::Absent => None,
        }
    }
}

impl From<DeclaredPolicy> for PolicyVariant {
    fn from(policy: DeclaredPolicy) -> Self {
        match policy {
            DeclaredPolicy::DeleteOlderThan { days } => Self::DeleteOlderThan { days },
            DeclaredPolicy::DontDelete => Self::DontDelete,
        }
    }
}

impl std::fmt::Display for PolicyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeleteOlderThan { days } => write!(f, "delete data older than {} days", days),
            Self::DontDelete => write!(f, "don't delete"),
            Self::Absent => write!(f, "no policy"),
        }
    }
}

/// 策略记录
///
/// `id` 由远端在创建时分配；`scope` 与策略创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRecord {
    pub id: PolicyId,
    pub scope: PolicyScope,
    pub policy: DeclaredPolicy,
}

impl PolicyRecord {
    pub fn new(id: PolicyId, scope: PolicyScope, policy: DeclaredPolicy) -> Self {
        Self { id, scope, policy }
    }

    pub fn variant(&self) -> PolicyVariant {
        self.policy.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_round_trips_through_variant() {
        for declared in [DeclaredPolicy::delete_older_than(30), DeclaredPolicy::DontDelete] {
            assert_eq!(PolicyVariant::from(declared).declared(), Some(declared));
        }
        assert_eq!(PolicyVariant::Absent.declared(), None);
        assert!(PolicyVariant::Absent.is_absent());
    }

    #[test]
    fn test_record_variant() {
        let record = PolicyRecord::new(
            PolicyId::new("drp-1"),
            PolicyScope::organization("acme"),
            DeclaredPolicy::DontDelete,
        );
        assert_eq!(record.id.as_str(), "drp-1");
        assert_eq!(record.variant(), PolicyVariant::DontDelete);
    }

    #[test]
    fn test_variant_serde_is_tagged() {
        let json = serde_json::to_value(PolicyVariant::DeleteOlderThan { days: 7 }).unwrap();
        assert_eq!(json, serde_json::json!({ "delete_older_than": { "days": 7 } }));

        let json = serde_json::to_value(PolicyVariant::DontDelete).unwrap();
        assert_eq!(json, serde_json::json!("dont_delete"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DeclaredPolicy::delete_older_than(14).to_string(),
            "delete data older than 14 days"
        );
        assert_eq!(PolicyVariant::Absent.to_string(), "no policy");
    }
}
