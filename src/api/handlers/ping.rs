//! Handler for the liveness probe.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::ping::PingResponse;
use crate::state::AppState;

/// Reports whether the database answers a round-trip query.
///
/// # Endpoint
///
/// `GET /ping`
///
/// # Response Codes
///
/// - **200 OK**: `{"status": "available", "time": "..."}`
/// - **503 Service Unavailable**: `{"status": "unavailable", "error": "connection_error", "detail": "..."}`
///
/// Probe failures are always reported in the body, never raised.
pub async fn ping_handler(State(state): State<AppState>) -> (StatusCode, Json<PingResponse>) {
    match state.health_service.check().await {
        Ok(time) => (StatusCode::OK, Json(PingResponse::available(time))),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(PingResponse::unavailable(&e)),
        ),
    }
}
