//! API Key model for authentication.
//!
//! API keys are opaque bearer tokens. They are stored verbatim and compared by exact match.

use serde::{Deserialize, Serialize};

/// Represents an API key record from the database.
///
/// # Database Table
///
/// Maps to the `api_keys` table with columns:
/// - `id`: Surrogate key assigned by SQLite (`AUTOINCREMENT`, never reused)
/// - `api_key`: The token itself, `UNIQUE`
///
/// Serialized as `{"id": 1, "api_key": "..."}` by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// Identifier assigned by the store on insert
    pub id: i64,

    /// The issued token, immutable once created
    #[sqlx(rename = "api_key")]
    #[serde(rename = "api_key")]
    pub key: String,
}

/// Response body for a freshly issued key.
///
/// ```json
/// { "api_key": "0b7e5c7e-4a4f-4d2e-9f0c-2d6f3f1a9b11" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyResponse {
    pub api_key: String,
}

impl From<ApiKeyRecord> for ApiKeyResponse {
    fn from(record: ApiKeyRecord) -> Self {
        Self {
            api_key: record.key,
        }
    }
}
