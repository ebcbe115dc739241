//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::validate::FieldViolation;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Request payload failed validation.
    #[error("Validation failed: {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No storage units of the requested type are available.
    #[error("No units available")]
    Capacity,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::Capacity => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients. Validation errors
        // carry their field-level detail in the body; everything else is a
        // plain message under the same "error" key.
        let body = match self {
            Self::Database(_) | Self::Internal(_) => {
                serde_json::json!({ "error": "Internal server error" })
            }
            Self::Validation(violations) => serde_json::json!({ "error": violations }),
            Self::NotFound(message) => serde_json::json!({ "error": message }),
            Self::Capacity => serde_json::json!({ "error": "No units available" }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::validate::FieldViolation;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Storage unit not found".to_owned());
        assert_eq!(err.to_string(), "Not found: Storage unit not found");

        let err = AppError::Capacity;
        assert_eq!(err.to_string(), "No units available");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(get_status(AppError::Capacity), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_status(AppError::Validation(vec![FieldViolation::new(
                "name",
                "is required"
            )])),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::NotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_detail_not_leaked() {
        let response =
            AppError::Internal("connection string with password".to_owned()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_validation_body_carries_field_detail() {
        let response = AppError::Validation(vec![
            FieldViolation::new("customerEmail", "must be a valid email address"),
            FieldViolation::new("customerName", "is required"),
        ])
        .into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let violations = body["error"].as_array().unwrap();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0]["field"], "customerEmail");
    }
}
