//! The key-protected resource.

use axum::Json;

/// Payload served once the caller's key has been accepted.
pub const SECURE_MESSAGE: &str = "This is a secure message!";

/// `GET /secure-data`
///
/// Only reachable through [`crate::middleware::auth::require_api_key`]. The body is the message
/// encoded as a JSON string.
pub async fn secure_data() -> Json<&'static str> {
    Json(SECURE_MESSAGE)
}
