//! Persistent key store.
//!
//! `KeyStore` owns the connection pool and is the only code that talks to the `api_keys` table.
//! It is built once at startup and handed to the router as state, so handlers never reach for a
//! global connection.

use crate::{db::DbPool, models::api_key::ApiKeyRecord};

/// Errors raised by key store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key is already present (`UNIQUE` constraint on `api_keys.api_key`).
    #[error("API key already exists")]
    Conflict,

    /// Anything else the database reports: connection failures, locked file, bad SQL.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Handle to the `api_keys` table.
///
/// Cloning is cheap; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct KeyStore {
    pool: DbPool,
}

impl KeyStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Create the `api_keys` table if it does not exist yet.
    ///
    /// Safe to run on every start; existing rows are left untouched.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS api_keys (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                api_key TEXT UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist a new key and return the stored record.
    ///
    /// No validation is applied to `key`; uniqueness is left to the table constraint.
    ///
    /// # Errors
    ///
    /// - `Conflict`: the key is already stored
    /// - `Storage`: any other database failure
    pub async fn insert(&self, key: &str) -> Result<ApiKeyRecord, StoreError> {
        sqlx::query_as::<_, ApiKeyRecord>(
            "INSERT INTO api_keys (api_key) VALUES (?) RETURNING id, api_key",
        )
        .bind(key)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict
            }
            other => StoreError::Storage(other),
        })
    }

    /// Exact, case-sensitive lookup.
    pub async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM api_keys WHERE api_key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Every stored record, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<ApiKeyRecord>, StoreError> {
        let records =
            sqlx::query_as::<_, ApiKeyRecord>("SELECT id, api_key FROM api_keys ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(records)
    }

    /// Round-trip to the database without touching any table.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
