//! Centralized translation from error kinds to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use resumelink_core::resume::ResumeError;
use resumelink_shared::AppError;

/// Error type returned by all route handlers.
///
/// Wraps the application error taxonomy so every handler converts failures
/// with `?` and no handler hand-builds an error response.
#[derive(Debug)]
pub struct ApiError(AppError);

impl ApiError {
    /// Create a validation error (HTTP 400).
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self(AppError::Validation(msg.into()))
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ResumeError> for ApiError {
    fn from(err: ResumeError) -> Self {
        let app = match err {
            ResumeError::NotFound(_) => AppError::NotFound("Resume not found".to_string()),
            ResumeError::Validation(msg) => AppError::Validation(msg),
            ResumeError::Storage(e) if e.is_validation() => AppError::Validation(e.to_string()),
            ResumeError::Storage(e) => AppError::ExternalService(e.to_string()),
            ResumeError::Repository(msg) => AppError::Database(msg),
        };
        Self(app)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Downstream failure detail goes to the log, not the response body.
        let message = if status.is_server_error() {
            error!(error = %self.0, "request failed");
            "An error occurred".to_string()
        } else {
            self.0.to_string()
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}
