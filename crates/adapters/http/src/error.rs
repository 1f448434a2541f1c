//! Error types for HTTP adapter

use reqwest::StatusCode;
use retention_errors::AppError;

use crate::jsonapi::ErrorDocument;

/// Convert a non-success HTTP response to AppError
pub fn map_http_error(status: StatusCode, body: &str, context: &str) -> AppError {
    let reason = ErrorDocument::message(body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string());
    let message = format!("{}: {} {}", context, status.as_u16(), reason);

    match status {
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::UNAUTHORIZED => AppError::unauthorized(message),
        StatusCode::FORBIDDEN => AppError::forbidden(message),
        // All other statuses (validation, rate limit, server errors) are external service errors
        _ => AppError::external_service(message),
    }
}

/// Convert a reqwest transport error (connect, timeout, body) to AppError
pub fn map_transport_error(err: reqwest::Error, context: &str) -> AppError {
    if err.is_timeout() {
        AppError::external_service(format!("{}: request timed out: {}", context, err))
    } else {
        AppError::external_service(format!("{}: {}", context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_404_error() {
        let err = map_http_error(StatusCode::NOT_FOUND, "", "Reading policy");
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("404 Not Found"));
    }

    #[test]
    fn test_map_401_error() {
        let err = map_http_error(StatusCode::UNAUTHORIZED, "", "Setting policy");
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_map_403_error() {
        let err = map_http_error(StatusCode::FORBIDDEN, "", "Setting policy");
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn test_map_error_document_detail() {
        let body = r#"{"errors":[{"status":"422","title":"invalid attribute","detail":"Days is too large"}]}"#;
        let err = map_http_error(StatusCode::UNPROCESSABLE_ENTITY, body, "Setting policy");
        assert!(matches!(err, AppError::ExternalService(_)));
        assert!(err.to_string().contains("Days is too large"));
    }
}
