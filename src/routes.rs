//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /ping`               - Liveness probe
//! - `POST   /`                   - Create a short URL
//! - `GET    /{short_id}`         - Redirect
//! - `DELETE /{short_id}`         - Soft-delete
//! - `GET    /{short_id}/status`  - Usage statistics
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Subnet filter** - 403 for clients inside blocked networks
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::subnet_filter::{self, SubnetFilter};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::{Router, middleware};
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path
/// normalization.
///
/// The subnet filter runs inside the trace span so rejected requests are
/// still logged.
pub fn build_router(state: AppState, filter: Arc<SubnetFilter>) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(middleware::from_fn_with_state(filter, subnet_filter::layer))
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState, filter: Arc<SubnetFilter>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, filter))
}
