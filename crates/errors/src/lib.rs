//! retention-errors - 统一错误处理
//!
//! 错误最终以宿主框架的 Diagnostic（summary + detail）形式呈现

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 无法确定作用域（既没有组织也没有工作空间）
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Provider 配置无法加载或不可用（例如 API 地址非法）
    #[error("Provider configuration error: {0}")]
    Provider(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// 远端调用失败，保留原始错误
    #[error("Remote call {operation} failed: {cause}")]
    Remote {
        operation: String,
        #[source]
        cause: Box<AppError>,
    },

    /// 导入 ID 格式错误
    #[error("Format error: {0}")]
    Format(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn remote(operation: impl Into<String>, cause: AppError) -> Self {
        Self::Remote {
            operation: operation.into(),
            cause: Box::new(cause),
        }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn unsupported_operation(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn external_service(msg: impl Into<String>) -> Self {
        Self::ExternalService(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 错误的简短类别名，用于日志字段
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Provider(_) => "provider",
            Self::Validation(_) => "validation",
            Self::Remote { .. } => "remote",
            Self::Format(_) => "format",
            Self::UnsupportedOperation(_) => "unsupported_operation",
            Self::NotFound(_) => "not_found",
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::ExternalService(_) => "external_service",
            Self::Internal(_) => "internal",
        }
    }

    /// 远端错误的根因（非远端错误返回自身）
    pub fn root_cause(&self) -> &AppError {
        match self {
            Self::Remote { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// 远端调用失败时的操作名
    pub fn remote_operation(&self) -> Option<&str> {
        match self {
            Self::Remote { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// 转换为宿主框架的错误诊断
    pub fn to_diagnostic(&self, summary: impl Into<String>) -> Diagnostic {
        let detail = match self {
            Self::Remote { cause, .. } => cause.to_string(),
            Self::Configuration(msg)
            | Self::Provider(msg)
            | Self::Validation(msg)
            | Self::Format(msg)
            | Self::UnsupportedOperation(msg) => msg.clone(),
            other => other.to_string(),
        };

        Diagnostic::error(summary, detail)
    }
}

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// 宿主框架诊断信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    /// 关联到具体属性路径
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
