//! 生命周期错误到宿主诊断的映射

use retention_errors::{AppError, Diagnostic};

/// 资源生命周期阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Create,
    Read,
    Update,
    Delete,
    Import,
    ValidateConfig,
}

/// 把生命周期中的错误转换为宿主框架诊断
pub fn into_diagnostic(stage: Lifecycle, err: &AppError) -> Diagnostic {
    let summary = match (stage, err) {
        (_, AppError::Configuration(_)) => "Missing organization",
        (_, AppError::Provider(_)) => "Invalid provider configuration",
        (_, AppError::Validation(_)) => "Invalid configuration",
        (_, AppError::Format(_)) => "Error importing data retention policy",
        (_, AppError::UnsupportedOperation(_)) => "Update not supported",
        (Lifecycle::Create, _) => "Unable to create data retention policy",
        (Lifecycle::Read, _) => "Failed to read data retention policy",
        (Lifecycle::Update, _) => "Update not supported",
        (Lifecycle::Delete, _) => "Unable to delete data retention policy",
        (Lifecycle::Import, _) => "Error importing data retention policy",
        (Lifecycle::ValidateConfig, _) => "Invalid configuration",
    };

    let diagnostic = err.to_diagnostic(summary);
    match err {
        AppError::Configuration(_) => diagnostic.with_attribute("organization"),
        _ => diagnostic,
    }
}
