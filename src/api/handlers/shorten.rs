//! Handler for the create-short-URL endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::url_service::build_short_url;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL, or returns the existing one for a known URL.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_id": "Xy3_kQ9", "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let url = state.url_service.create_short_url(&payload.url).await?;

    let short_url = state
        .public_base_url
        .as_deref()
        .map(|base| build_short_url(base, &url.short_id));

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_id: url.short_id,
            url: url.original_url,
            short_url,
        }),
    ))
}
