//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::store::StoreError;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// API key header is missing, unreadable, or not in the store.
    ///
    /// Returns HTTP 403 Forbidden. The response never says which of those it was.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Every generated key collided with an existing one.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Could not generate a unique API key")]
    KeyGenerationExhausted,

    /// Key store operation failed.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Store(StoreError::Storage(err))
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidApiKey` → 403 Forbidden
/// - `KeyGenerationExhausted` → 500 Internal Server Error
/// - `Store` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidApiKey => {
                (StatusCode::FORBIDDEN, "invalid_api_key", self.to_string())
            }
            AppError::KeyGenerationExhausted => {
                tracing::error!("API key generation exhausted its retries");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "key_generation_failed",
                    self.to_string(),
                )
            }
            AppError::Store(ref err) => {
                tracing::error!(error = %err, "key store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
