//! 通用类型定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 组织名称
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct OrganizationName(pub String);

impl OrganizationName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrganizationName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// 工作空间 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct WorkspaceId(pub String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// 数据保留策略 ID（由远端在创建时分配）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct PolicyId(pub String);

impl PolicyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PolicyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// 作用域类别，决定调用哪一组远端 API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeKind {
    Organization,
    Workspace,
}

impl ScopeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Workspace => "workspace",
        }
    }
}

impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 策略作用域：整个组织，或组织下的单个工作空间
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyScope {
    Organization(OrganizationName),
    Workspace(WorkspaceId),
}

impl PolicyScope {
    pub fn organization(name: impl Into<String>) -> Self {
        Self::Organization(OrganizationName::new(name))
    }

    pub fn workspace(id: impl Into<String>) -> Self {
        Self::Workspace(WorkspaceId::new(id))
    }

    pub fn kind(&self) -> ScopeKind {
        match self {
            Self::Organization(_) => ScopeKind::Organization,
            Self::Workspace(_) => ScopeKind::Workspace,
        }
    }

    /// 远端寻址值：组织名或工作空间 ID
    pub fn address(&self) -> &str {
        match self {
            Self::Organization(name) => name.as_str(),
            Self::Workspace(id) => id.as_str(),
        }
    }

    pub fn organization_name(&self) -> Option<&OrganizationName> {
        match self {
            Self::Organization(name) => Some(name),
            Self::Workspace(_) => None,
        }
    }

    pub fn workspace_id(&self) -> Option<&WorkspaceId> {
        match self {
            Self::Organization(_) => None,
            Self::Workspace(id) => Some(id),
        }
    }
}

impl std::fmt::Display for PolicyScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind(), self.address())
    }
}
