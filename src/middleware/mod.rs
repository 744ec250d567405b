//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can short-circuit requests (reject unauthorized) before the handler runs.

/// API key validation middleware
pub mod auth;
