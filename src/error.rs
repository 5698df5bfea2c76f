/**
 * Application Error Types
 *
 * Error types used by the HTTP handlers. Each variant maps to a status
 * code and is converted to a JSON error response via `IntoResponse`, so
 * handlers can return `Result<_, AppError>` directly.
 *
 * The real-time hub deliberately has no error surface: publishing is
 * fire-and-forget and a full subscriber buffer is a counted drop, not a
 * failure (see `realtime::hub`).
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors returned from HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The request body failed validation
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },
}

impl AppError {
    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Human-readable error message
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { message } => message.clone(),
            Self::Validation { message } => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = serde_json::json!({ "error": message });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
