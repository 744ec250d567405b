//! Readiness probe.
//!
//! `GET /` only proves the process is up; `GET /health` also round-trips to the key store so a
//! load balancer can stop routing to an instance whose database file is gone or locked.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, store::KeyStore};

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub database: &'static str,
    /// When the store answered
    pub timestamp: DateTime<Utc>,
}

/// `GET /health` → `{"status": "healthy", "database": "connected", "timestamp": ...}`.
///
/// A store failure surfaces through [`AppError`] as the usual 500 envelope.
pub async fn health_check(State(store): State<KeyStore>) -> Result<Json<Readiness>, AppError> {
    store.ping().await?;

    Ok(Json(Readiness {
        status: "healthy",
        database: "connected",
        timestamp: Utc::now(),
    }))
}
