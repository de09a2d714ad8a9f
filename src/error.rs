//! Application error type and its mapping onto the HTTP wire contract.
//!
//! The API exposes exactly three error shapes: `400 {"error": "invalid url"}`,
//! `404 {"error": "URL not found"}` and `500 {"error": "Server error"}`.
//! Internal detail (database messages, constraint names) is logged and never
//! leaks into a response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by the service and repository layers.
///
/// `Conflict` is internal-only: it signals a `short_id` uniqueness collision
/// that the service resolves by recomputing the candidate identifier and
/// retrying. If it ever reaches the HTTP boundary it is reported as a
/// generic server error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("unique constraint violation: {0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for a storage-layer uniqueness collision that the caller
    /// may retry with a fresh candidate identifier.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(detail) | AppError::Internal(detail) => {
                tracing::error!(%detail, "request failed with server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(db.constraint().unwrap_or("unknown").to_string());
        }

        AppError::internal(format!("database error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_detection() {
        assert!(AppError::conflict("url_mappings_short_id_key").is_conflict());
        assert!(!AppError::bad_request("invalid url").is_conflict());
        assert!(!AppError::internal("database error").is_conflict());
    }

    #[test]
    fn test_display_preserves_message() {
        let err = AppError::not_found("URL not found");
        assert_eq!(err.to_string(), "URL not found");
    }

    async fn response_parts(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_internal_renders_generic_server_error() {
        let (status, body) =
            response_parts(AppError::internal("database error: connection refused")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Server error"}"#);
    }

    #[tokio::test]
    async fn test_unresolved_conflict_renders_generic_server_error() {
        let (status, body) =
            response_parts(AppError::conflict("url_mappings_short_id_key")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"Server error"}"#);
    }

    #[tokio::test]
    async fn test_validation_renders_invalid_url() {
        let (status, body) = response_parts(AppError::bad_request("invalid url")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"invalid url"}"#);
    }

    #[tokio::test]
    async fn test_not_found_renders_url_not_found() {
        let (status, body) = response_parts(AppError::not_found("URL not found")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, r#"{"error":"URL not found"}"#);
    }
}
