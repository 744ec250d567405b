//! API key management HTTP handlers.
//!
//! This module implements the key endpoints:
//! - POST /generate-api-key - Issue a new key
//! - GET /get-api-keys - List every issued key

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    models::api_key::{ApiKeyRecord, ApiKeyResponse},
    services::key_service,
    store::KeyStore,
};

/// Issue a new API key.
///
/// # Endpoint
///
/// `POST /generate-api-key`
///
/// No request body is read.
///
/// # Response
///
/// - **Success (200 OK)**: Returns the new key
/// - **Error (500)**: Store failure or repeated key collisions
///
/// ```json
/// { "api_key": "0b7e5c7e-4a4f-4d2e-9f0c-2d6f3f1a9b11" }
/// ```
pub async fn generate_api_key(
    State(store): State<KeyStore>,
) -> Result<Json<ApiKeyResponse>, AppError> {
    let record = key_service::issue_key(&store).await?;

    Ok(Json(record.into()))
}

/// List all issued API keys.
///
/// # Endpoint
///
/// `GET /get-api-keys`
///
/// # Authentication
///
/// None unless `PROTECT_KEY_LISTING` is set, in which case the router wraps this handler in the
/// same key check as `/secure-data`.
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "api_key": "0b7e5c7e-4a4f-4d2e-9f0c-2d6f3f1a9b11" },
///   { "id": 2, "api_key": "5d1c3e8a-7b62-4f0e-8a55-9c0a7f6e2d34" }
/// ]
/// ```
///
/// Records are returned in issue order.
pub async fn get_api_keys(
    State(store): State<KeyStore>,
) -> Result<Json<Vec<ApiKeyRecord>>, AppError> {
    let records = store.list_all().await?;

    Ok(Json(records))
}
