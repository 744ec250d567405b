//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the `api-key` header
//! 2. Verify it exists in the key store
//! 3. Reject unauthorized requests with HTTP 403
//!
//! A request without the header is rejected before the store is consulted.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, store::KeyStore};

/// Name of the request header carrying the key. Header lookup is case-insensitive.
pub const API_KEY_HEADER: &str = "api-key";

/// Pull the presented key out of the request headers.
///
/// Returns `None` when the header is absent or is not valid visible ASCII.
pub fn presented_key(headers: &HeaderMap) -> Option<&str> {
    headers.get(API_KEY_HEADER).and_then(|h| h.to_str().ok())
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `api-key: <key>` header from request
/// 2. If missing: return 403 without querying the store
/// 3. Look the key up with an exact match
/// 4. If found: call next handler
/// 5. If not found: return 403 Forbidden
///
/// # Returns
///
/// - `Ok(Response)` if authenticated successfully (calls next handler)
/// - `Err(AppError::InvalidApiKey)` if authentication fails (returns 403)
/// - `Err(AppError::Store)` if the store could not be queried (returns 500)
pub async fn require_api_key(
    State(store): State<KeyStore>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(key) = presented_key(request.headers()).map(str::to_owned) else {
        tracing::debug!("request rejected: no api-key header");
        return Err(AppError::InvalidApiKey);
    };

    if !store.exists(&key).await? {
        tracing::debug!("request rejected: unknown api key");
        return Err(AppError::InvalidApiKey);
    }

    Ok(next.run(request).await)
}
