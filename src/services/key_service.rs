//! Key issuance.
//!
//! Keys are version 4 UUIDs whose 122 random bits come from `rand`'s thread-local CSPRNG.
//! A collision with an existing key is retried with a fresh value a bounded number of times.

use uuid::{Builder, Uuid};

use crate::{
    error::AppError,
    models::api_key::ApiKeyRecord,
    store::{KeyStore, StoreError},
};

/// Total insert attempts before giving up on a key collision.
pub const MAX_ISSUE_ATTEMPTS: usize = 3;

/// Generate a new random key in hyphenated UUID form (36 characters).
pub fn generate_key() -> String {
    let bytes: [u8; 16] = rand::random();
    let uuid: Uuid = Builder::from_random_bytes(bytes).into_uuid();
    uuid.hyphenated().to_string()
}

/// Issue and persist a new API key.
///
/// # Errors
///
/// - `KeyGenerationExhausted`: every attempt hit the unique constraint
/// - `Store`: the store failed for any other reason (not retried)
pub async fn issue_key(store: &KeyStore) -> Result<ApiKeyRecord, AppError> {
    issue_key_with(store, generate_key).await
}

/// Issue a key drawing candidates from `next_key`.
pub(crate) async fn issue_key_with<F>(
    store: &KeyStore,
    mut next_key: F,
) -> Result<ApiKeyRecord, AppError>
where
    F: FnMut() -> String,
{
    for attempt in 1..=MAX_ISSUE_ATTEMPTS {
        match store.insert(&next_key()).await {
            Ok(record) => {
                tracing::info!(id = record.id, "issued API key");
                return Ok(record);
            }
            Err(StoreError::Conflict) => {
                tracing::warn!(attempt, "generated API key collided, retrying");
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(AppError::KeyGenerationExhausted)
}
