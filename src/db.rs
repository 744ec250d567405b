//! Database connection pool management.
//!
//! This module provides utilities for creating and managing a SQLite connection pool.
//! Schema creation lives with the key store (see [`crate::store::KeyStore::initialize`]).

use std::str::FromStr;

use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Type alias for SQLite connection pool.
///
/// Instead of writing `Pool<Sqlite>` everywhere, we can use `DbPool`.
pub type DbPool = Pool<Sqlite>;

/// Create a new SQLite connection pool.
///
/// A connection pool maintains multiple database connections that can be reused across HTTP requests which is much more efficient than opening a new connection for each request.
/// Each request checks a connection out for the duration of its query and the pool takes it back
/// whether the query succeeded or not.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite://api_keys.db` or `sqlite::memory:`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # In-memory databases
///
/// Every SQLite connection to `:memory:` opens its own private database. For those URLs the pool
/// is pinned to a single connection that is never recycled, so all requests see the same data.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - The database file cannot be created or opened
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    if database_url.contains(":memory:") {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        // Limit concurrent connections
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}
