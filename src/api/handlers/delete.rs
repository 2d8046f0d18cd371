//! Handler for soft-deleting a short URL.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::delete::DeleteResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deactivates a short URL. The record and its logs are kept.
///
/// # Endpoint
///
/// `DELETE /{short_id}`
///
/// Deleting an already deleted short URL succeeds again.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn delete_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.url_service.deactivate(&short_id).await?;

    Ok(Json(DeleteResponse::deleted(short_id)))
}
