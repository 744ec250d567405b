//! API key issuance and validation service.
//!
//! Clients obtain an opaque key from `POST /generate-api-key` and present it in the `api-key`
//! header to reach `GET /secure-data`.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: SQLite with sqlx (async queries)
//! - **Authentication**: exact-match lookup of the `api-key` header
//! - **Format**: JSON requests/responses

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use routes::app;
pub use store::KeyStore;
