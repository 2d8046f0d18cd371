//! Handler for usage statistics of a short URL.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::status::{StatusQueryParams, StatusResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the access count of a short URL, optionally with log entries.
///
/// # Endpoint
///
/// `GET /{short_id}/status?full_info=true&max_result=10&offset=0`
///
/// # Query Parameters
///
/// - `full_info`: include log entries (default `false`)
/// - `max_result`: page size of log entries (default 10)
/// - `offset`: newest entries to skip (default 0)
///
/// # Response
///
/// ```json
/// {
///   "total": 2,
///   "logs": [
///     { "accessed_at": "2026-01-01T10:00:00Z", "client_info": "203.0.113.7" }
///   ]
/// }
/// ```
///
/// Deleted short URLs still report their history.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed query parameters.
/// Returns 404 Not Found if the identifier is unknown.
pub async fn status_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    params: Result<Query<StatusQueryParams>, QueryRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let report = state
        .usage_service
        .get_usage(&short_id, params.into())
        .await?;

    Ok(Json(report.into()))
}
