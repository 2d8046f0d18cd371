//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::api::extractors::ClientAddr;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// The `Location` header is built before the access is recorded, so every
/// access log entry corresponds to a redirect that was actually sent and
/// usage totals are exact.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
/// Returns 410 Gone if the short URL has been deleted.
/// Returns 500 Internal Server Error if the stored URL is not a valid
/// `Location` value; no access is recorded in that case.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    client: ClientAddr,
) -> Result<impl IntoResponse, AppError> {
    let url = state.url_service.resolve_active(&short_id).await?;

    let location = HeaderValue::from_str(&url.original_url).map_err(|e| {
        error!(short_id = %short_id, error = %e, "Stored URL is not a valid Location header");
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "short_id": short_id }),
        )
    })?;

    state
        .url_service
        .record_access(&url, client.client_info())
        .await?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
