//! Error types for the reverse words service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body is present but is not a JSON object
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Response body could not be encoded
    #[error("{0}")]
    Serialization(String),

    /// Counter registration or exposition failed
    #[error("{0}")]
    Metrics(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedBody(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            // Encoding failures carry the raw error text as a plain body.
            ApiError::Serialization(msg) | ApiError::Metrics(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

impl From<prometheus::Error> for ApiError {
    fn from(err: prometheus::Error) -> Self {
        ApiError::Metrics(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_body_is_bad_request() {
        let response = ApiError::MalformedBody("expected value".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_serialization_is_internal_error() {
        let response = ApiError::Serialization("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_serialization_display_is_raw_text() {
        let err = ApiError::Serialization("key must be a string".to_string());
        assert_eq!(err.to_string(), "key must be a string");
    }

    #[test]
    fn test_from_prometheus_error() {
        let err: ApiError = prometheus::Error::Msg("duplicate".to_string()).into();
        assert!(matches!(err, ApiError::Metrics(ref m) if m.contains("duplicate")));
    }
}
