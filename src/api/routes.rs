//! API route configuration.

use crate::api::handlers::{
    delete_handler, ping_handler, redirect_handler, shorten_handler, status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET    /ping`               - Liveness probe
/// - `POST   /`                   - Create a short URL
/// - `GET    /{short_id}`         - Redirect to the original URL
/// - `DELETE /{short_id}`         - Soft-delete a short URL
/// - `GET    /{short_id}/status`  - Usage statistics
///
/// `/ping` cannot shadow a short URL since issued identifiers are 7 or 11
/// characters long.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/ping", get(ping_handler))
        .route("/{short_id}", get(redirect_handler).delete(delete_handler))
        .route("/{short_id}/status", get(status_handler))
}
