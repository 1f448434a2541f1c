//! JSON:API documents for data retention policies

use retention_common::PolicyId;
use retention_errors::{AppError, AppResult};
use retention_ports::{PolicyChoice, RemoteDeleteOlder, RemoteDontDelete};
use serde::{Deserialize, Serialize};

pub const MEDIA_TYPE: &str = "application/vnd.api+json";

pub const TYPE_DELETE_OLDER: &str = "data-retention-policy-delete-olders";
pub const TYPE_DONT_DELETE: &str = "data-retention-policy-dont-deletes";
/// Legacy policy type, only ever expressed delete-older-than
pub const TYPE_LEGACY: &str = "data-retention-policies";

/// Request body: `{"data": {"type": ..., "attributes": {...}}}`
#[derive(Debug, Serialize)]
pub struct SetRequest {
    pub data: SetRequestData,
}

#[derive(Debug, Serialize)]
pub struct SetRequestData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: Attributes,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(
        rename = "delete-older-than-n-days",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_older_than_n_days: Option<i64>,
}

impl SetRequest {
    pub fn delete_older(days: u32) -> Self {
        Self {
            data: SetRequestData {
                kind: TYPE_DELETE_OLDER,
                attributes: Attributes {
                    delete_older_than_n_days: Some(i64::from(days)),
                },
            },
        }
    }

    pub fn dont_delete() -> Self {
        Self {
            data: SetRequestData {
                kind: TYPE_DONT_DELETE,
                attributes: Attributes::default(),
            },
        }
    }
}

/// Response document; `data` is null when no policy is set
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub data: Option<Resource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Attributes,
}

/// Error document: `{"errors": [{"status": "422", "title": ..., "detail": ...}]}`
#[derive(Debug, Deserialize)]
pub struct ErrorDocument {
    #[serde(default)]
    pub errors: Vec<ErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorObject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorDocument {
    /// Joins error titles and details, `None` if the body is not an error document
    pub fn message(body: &str) -> Option<String> {
        let doc: ErrorDocument = serde_json::from_str(body).ok()?;
        let parts: Vec<String> = doc
            .errors
            .into_iter()
            .filter_map(|e| match (e.title, e.detail) {
                (Some(title), Some(detail)) => Some(format!("{}: {}", title, detail)),
                (Some(title), None) => Some(title),
                (None, Some(detail)) => Some(detail),
                (None, None) => None,
            })
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

fn days(resource: &Resource) -> AppResult<u32> {
    let days = resource.attributes.delete_older_than_n_days.ok_or_else(|| {
        AppError::external_service(format!(
            "{} {} is missing delete-older-than-n-days",
            resource.kind, resource.id
        ))
    })?;
    u32::try_from(days).map_err(|_| {
        AppError::external_service(format!(
            "{} {} has invalid delete-older-than-n-days: {}",
            resource.kind, resource.id, days
        ))
    })
}

fn parse_document(body: &str) -> AppResult<Document> {
    serde_json::from_str(body)
        .map_err(|e| AppError::external_service(format!("Invalid JSON:API document: {}", e)))
}

fn expect_resource(body: &str, expected: &str) -> AppResult<Resource> {
    let resource = parse_document(body)?
        .data
        .ok_or_else(|| AppError::external_service("Response document has no data"))?;
    if resource.kind != expected {
        return Err(AppError::external_service(format!(
            "Unexpected resource type {} (expected {})",
            resource.kind, expected
        )));
    }
    Ok(resource)
}

pub fn decode_delete_older(body: &str) -> AppResult<RemoteDeleteOlder> {
    let resource = expect_resource(body, TYPE_DELETE_OLDER)?;
    Ok(RemoteDeleteOlder {
        delete_older_than_n_days: days(&resource)?,
        id: PolicyId::new(resource.id),
    })
}

pub fn decode_dont_delete(body: &str) -> AppResult<RemoteDontDelete> {
    let resource = expect_resource(body, TYPE_DONT_DELETE)?;
    Ok(RemoteDontDelete {
        id: PolicyId::new(resource.id),
    })
}

/// Decodes the polymorphic policy relationship
pub fn decode_choice(body: &str) -> AppResult<PolicyChoice> {
    let Some(resource) = parse_document(body)?.data else {
        return Ok(PolicyChoice::None);
    };

    match resource.kind.as_str() {
        TYPE_DELETE_OLDER => Ok(PolicyChoice::DeleteOlder(RemoteDeleteOlder {
            delete_older_than_n_days: days(&resource)?,
            id: PolicyId::new(resource.id),
        })),
        TYPE_DONT_DELETE => Ok(PolicyChoice::DontDelete(RemoteDontDelete {
            id: PolicyId::new(resource.id),
        })),
        TYPE_LEGACY => Ok(PolicyChoice::Legacy(RemoteDeleteOlder {
            delete_older_than_n_days: days(&resource)?,
            id: PolicyId::new(resource.id),
        })),
        other => Err(AppError::external_service(format!(
            "Unknown data retention policy type: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_request_bodies() {
        let body = serde_json::to_value(SetRequest::delete_older(30)).unwrap();
        assert_eq!(
            body,
            json!({
                "data": {
                    "type": "data-retention-policy-delete-olders",
                    "attributes": { "delete-older-than-n-days": 30 }
                }
            })
        );

        let body = serde_json::to_value(SetRequest::dont_delete()).unwrap();
        assert_eq!(
            body,
            json!({ "data": { "type": "data-retention-policy-dont-deletes", "attributes": {} } })
        );
    }

    #[test]
    fn test_decode_choice_variants() {
        let body = r#"{"data":{"id":"drp-1","type":"data-retention-policy-delete-olders","attributes":{"delete-older-than-n-days":12}}}"#;
        assert_eq!(
            decode_choice(body).unwrap(),
            PolicyChoice::DeleteOlder(RemoteDeleteOlder {
                id: PolicyId::new("drp-1"),
                delete_older_than_n_days: 12,
            })
        );

        let body = r#"{"data":{"id":"drp-2","type":"data-retention-policy-dont-deletes"}}"#;
        assert_eq!(
            decode_choice(body).unwrap(),
            PolicyChoice::DontDelete(RemoteDontDelete { id: PolicyId::new("drp-2") })
        );

        let body = r#"{"data":{"id":"drp-3","type":"data-retention-policies","attributes":{"delete-older-than-n-days":90}}}"#;
        assert!(matches!(decode_choice(body).unwrap(), PolicyChoice::Legacy(_)));
    }

    #[test]
    fn test_decode_choice_null_data_is_none() {
        assert_eq!(decode_choice(r#"{"data":null}"#).unwrap(), PolicyChoice::None);
        assert_eq!(decode_choice("{}").unwrap(), PolicyChoice::None);
    }

    #[test]
    fn test_decode_rejects_unknown_and_malformed() {
        let unknown = r#"{"data":{"id":"x","type":"workspaces"}}"#;
        assert!(matches!(decode_choice(unknown), Err(AppError::ExternalService(_))));

        let missing_days = r#"{"data":{"id":"x","type":"data-retention-policy-delete-olders","attributes":{}}}"#;
        assert!(decode_choice(missing_days).is_err());

        let negative = r#"{"data":{"id":"x","type":"data-retention-policy-delete-olders","attributes":{"delete-older-than-n-days":-3}}}"#;
        assert!(decode_delete_older(negative).is_err());

        assert!(decode_choice("not json").is_err());
    }

    #[test]
    fn test_decode_set_response_checks_type() {
        let body = r#"{"data":{"id":"drp-9","type":"data-retention-policy-dont-deletes"}}"#;
        assert!(decode_dont_delete(body).is_ok());
        assert!(decode_delete_older(body).is_err());
    }

    #[test]
    fn test_error_document_message() {
        let body = r#"{"errors":[{"status":"422","title":"invalid attribute","detail":"Days must be positive"}]}"#;
        assert_eq!(
            ErrorDocument::message(body).as_deref(),
            Some("invalid attribute: Days must be positive")
        );
        assert_eq!(ErrorDocument::message("<html>"), None);
        assert_eq!(ErrorDocument::message(r#"{"errors":[]}"#), None);
    }
}
