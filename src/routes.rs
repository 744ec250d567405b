//! HTTP router construction.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware, store::KeyStore};

/// Build the application router around an initialized key store.
///
/// `protect_key_listing` moves `GET /get-api-keys` behind the key check; otherwise it is public.
pub fn app(store: KeyStore, protect_key_listing: bool) -> Router {
    let mut authenticated_routes =
        Router::new().route("/secure-data", get(handlers::secure::secure_data));
    let mut public_routes = Router::new()
        .route("/", get(handlers::home::home))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/generate-api-key",
            post(handlers::keys::generate_api_key),
        );

    let listing = Router::new().route("/get-api-keys", get(handlers::keys::get_api_keys));
    if protect_key_listing {
        authenticated_routes = authenticated_routes.merge(listing);
    } else {
        public_routes = public_routes.merge(listing);
    }

    let authenticated_routes = authenticated_routes.route_layer(
        axum_middleware::from_fn_with_state(store.clone(), middleware::auth::require_api_key),
    );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
