//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that receives request data, calls into the key store or
//! services, and returns a JSON response.

/// Readiness probe
pub mod health;
/// Welcome endpoint
pub mod home;
/// Key issuance and listing
pub mod keys;
/// Key-protected resource
pub mod secure;
