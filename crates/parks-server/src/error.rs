//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for every endpoint, HTML and JSON
//! alike. It implements `axum::response::IntoResponse` to produce a structured
//! JSON error body with the matching status code. Server-side failures are
//! logged in full and reported to the client with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use parks_storage::StorageError;

use crate::render::RenderError;

/// Structured error detail in error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Request failures with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed identifier or request body (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No record for the requested identifier (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Template missing or context mismatch (500).
    #[error("render failure: {0}")]
    RenderFailure(String),

    /// Connectivity or constraint failure in the store (500).
    #[error("store failure: {0}")]
    StoreFailure(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RenderFailure(_) | ApiError::StoreFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::BadRequest(msg) => ApiErrorDetail {
                code: "BAD_REQUEST".to_string(),
                message: msg.clone(),
            },
            ApiError::NotFound(msg) => ApiErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: msg.clone(),
            },
            ApiError::RenderFailure(_) | ApiError::StoreFailure(_) => {
                tracing::error!(error = %self, "request failed");
                ApiErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "internal server error".to_string(),
                }
            }
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (self.status(), axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::ParkNotFound(id) => {
                ApiError::NotFound(format!("park {} was not found", id))
            }
            _ => ApiError::StoreFailure(err.to_string()),
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::RenderFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parks_storage::ParkId;

    #[test]
    fn missing_park_maps_to_not_found() {
        let err: ApiError = StorageError::ParkNotFound(ParkId::new_v4()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn other_storage_errors_are_server_errors() {
        let err: ApiError = StorageError::Migration("boom".into()).into();
        assert!(matches!(err, ApiError::StoreFailure(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn server_errors_do_not_leak_detail() {
        let response = ApiError::StoreFailure("disk I/O error at /var/db".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "internal server error");
        assert!(!String::from_utf8_lossy(&bytes).contains("/var/db"));
    }
}
