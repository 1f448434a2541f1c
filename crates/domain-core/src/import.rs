//! 导入 ID 解析

use retention_common::{OrganizationName, PolicyId};
use retention_errors::{AppError, AppResult};

/// 导入 ID 的期望格式
pub const IMPORT_ID_FORMAT: &str = "<ORGANIZATION>/<POLICY ID>";

/// 解析后的导入 ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportId {
    pub organization: OrganizationName,
    pub id: PolicyId,
}

impl ImportId {
    /// 按第一个 `/` 切分，剩余部分整体作为策略 ID；没有 `/` 时报格式错误
    pub fn parse(raw: &str) -> AppResult<Self> {
        match raw.split_once('/') {
            Some((organization, id)) => Ok(Self {
                organization: OrganizationName::new(organization),
                id: PolicyId::new(id),
            }),
            _ => Err(AppError::format(format!(
                "Invalid data retention policy import format: {} (expected {})",
                raw, IMPORT_ID_FORMAT
            ))),
        }
    }
}

impl std::str::FromStr for ImportId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_segments() {
        let parsed = ImportId::parse("acme/pol-abc123").unwrap();
        assert_eq!(parsed.organization.as_str(), "acme");
        assert_eq!(parsed.id.as_str(), "pol-abc123");
    }

    #[test]
    fn test_split_stops_after_first_separator() {
        let parsed: ImportId = "acme/pol/extra".parse().unwrap();
        assert_eq!(parsed.organization.as_str(), "acme");
        assert_eq!(parsed.id.as_str(), "pol/extra");
    }

    #[test]
    fn test_empty_segments_are_kept() {
        let parsed = ImportId::parse("/pol-1").unwrap();
        assert_eq!(parsed.organization.as_str(), "");
        assert_eq!(parsed.id.as_str(), "pol-1");

        let parsed = ImportId::parse("acme/").unwrap();
        assert_eq!(parsed.organization.as_str(), "acme");
        assert_eq!(parsed.id.as_str(), "");
    }

    #[test]
    fn test_invalid_formats() {
        for raw in ["no-slash-here", ""] {
            let err = ImportId::parse(raw).unwrap_err();
            assert!(matches!(err, AppError::Format(_)), "{raw} should be rejected");
            assert!(err.to_string().contains(IMPORT_ID_FORMAT));
        }
    }
}
