use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sgpa_core::error::{UploadError, ValidationError};

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain errors from `sgpa_core` and adds HTTP-specific variants.
/// Upload errors render as plain text for the browser form; everything else
/// renders as a JSON `{ "error", "code" }` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Marks outside the configured range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The upload form was missing its photo.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Upload(err) => {
                return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
            }
            AppError::Validation(err) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", err.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
