//! 持久化状态模型
//!
//! 与宿主框架交换的配置 / plan / state 都是这个形状。

use retention_common::PolicyScope;
use retention_domain::{DeclaredPolicy, PolicyRecord, PolicyVariant, days_from_number};
use retention_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize, Serializer};

/// `delete_older_than { days = N }` 块
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeleteOlderThanBlock {
    /// 宿主以数值（浮点）传入，整数时按整数写回
    #[serde(serialize_with = "serialize_number")]
    pub days: f64,
}

impl DeleteOlderThanBlock {
    pub fn new(days: u32) -> Self {
        Self {
            days: f64::from(days),
        }
    }
}

fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// `dont_delete {}` 块
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DontDeleteBlock {}

/// 资源状态
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_older_than: Option<DeleteOlderThanBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dont_delete: Option<DontDeleteBlock>,
}

impl PolicyState {
    pub fn for_organization(organization: impl Into<String>) -> Self {
        Self {
            organization: Some(organization.into()),
            ..Default::default()
        }
    }

    pub fn for_workspace(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: Some(workspace_id.into()),
            ..Default::default()
        }
    }

    pub fn with_delete_older_than(mut self, days: u32) -> Self {
        self.delete_older_than = Some(DeleteOlderThanBlock::new(days));
        self.dont_delete = None;
        self
    }

    pub fn with_dont_delete(mut self) -> Self {
        self.delete_older_than = None;
        self.dont_delete = Some(DontDeleteBlock::default());
        self
    }

    /// 校验策略块并转为声明的策略：两个块必须恰好出现一个
    pub fn declared_policy(&self) -> AppResult<DeclaredPolicy> {
        match (&self.delete_older_than, &self.dont_delete) {
            (Some(block), None) => {
                let days = days_from_number(block.days).map_err(|e| match e {
                    AppError::Validation(msg) => {
                        AppError::validation(format!("delete_older_than.days: {}", msg))
                    }
                    other => other,
                })?;
                Ok(DeclaredPolicy::DeleteOlderThan { days })
            }
            (None, Some(_)) => Ok(DeclaredPolicy::DontDelete),
            (Some(_), Some(_)) => Err(AppError::validation(
                "Exactly one of delete_older_than or dont_delete must be configured, got both",
            )),
            (None, None) => Err(AppError::validation(
                "Exactly one of delete_older_than or dont_delete must be configured, got neither",
            )),
        }
    }

    /// 用变体覆盖策略块；`Absent` 清空两个块
    pub fn set_variant(&mut self, variant: PolicyVariant) {
        match variant {
            PolicyVariant::DeleteOlderThan { days } => {
                self.delete_older_than = Some(DeleteOlderThanBlock::new(days));
                self.dont_delete = None;
            }
            PolicyVariant::DontDelete => {
                self.delete_older_than = None;
                self.dont_delete = Some(DontDeleteBlock::default());
            }
            PolicyVariant::Absent => {
                self.delete_older_than = None;
                self.dont_delete = None;
            }
        }
    }

    /// 由策略记录构建状态
    ///
    /// 工作空间作用域保留 plan 中声明的组织（不参与寻址）。
    pub fn from_record(record: &PolicyRecord, declared_organization: Option<String>) -> Self {
        let mut state = match &record.scope {
            PolicyScope::Organization(name) => Self::for_organization(name.as_str()),
            PolicyScope::Workspace(id) => Self {
                organization: declared_organization,
                workspace_id: Some(id.to_string()),
                ..Default::default()
            },
        };
        state.id = Some(record.id.to_string());
        state.set_variant(record.variant());
        state
    }
}
