//! Short URL creation, resolution, and deactivation service.

use std::sync::Arc;

use crate::domain::entities::{NewAccessLog, NewShortUrl, ShortUrl};
use crate::domain::repositories::{AccessLogRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::short_id::{encode_id, is_well_formed};
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{debug, info};

/// Service for creating and resolving short URLs.
///
/// Creation is idempotent per destination URL. Resolution for redirects
/// distinguishes unknown identifiers (not found) from deactivated ones (gone)
/// and appends one access log entry per successful resolution.
pub struct UrlService<U: UrlRepository, L: AccessLogRepository> {
    url_repository: Arc<U>,
    access_log_repository: Arc<L>,
}

impl<U: UrlRepository, L: AccessLogRepository> UrlService<U, L> {
    /// Creates a new URL service.
    pub fn new(url_repository: Arc<U>, access_log_repository: Arc<L>) -> Self {
        Self {
            url_repository,
            access_log_repository,
        }
    }

    /// Creates a short URL, or returns the existing one for the same destination.
    ///
    /// # Flow
    ///
    /// 1. Validate the destination URL
    /// 2. Return the existing record if the URL is already stored (active or not)
    /// 3. Reserve an id, derive the short identifier, insert both at once
    /// 4. If a concurrent request stored the same URL first, return its record
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_short_url(&self, original_url: &str) -> Result<ShortUrl, AppError> {
        let original_url = validate_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self
            .url_repository
            .find_by_original_url(&original_url)
            .await?
        {
            debug!(short_id = %existing.short_id, "URL already shortened");
            return Ok(existing);
        }

        let id = self.url_repository.reserve_id().await?;
        let new_url = NewShortUrl {
            id,
            original_url: original_url.clone(),
            short_id: encode_id(id),
        };

        match self.url_repository.insert(new_url).await? {
            Some(created) => {
                info!(id = created.id, short_id = %created.short_id, "Short URL created");
                Ok(created)
            }
            None => {
                debug!("Concurrent creation detected, returning stored record");
                self.url_repository
                    .find_by_original_url(&original_url)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal(
                            "URL record missing after insert conflict",
                            json!({ "url": original_url }),
                        )
                    })
            }
        }
    }

    /// Resolves a short identifier to an active record for a redirect.
    ///
    /// Nothing is logged here; callers record the access with
    /// [`Self::record_access`] once the redirect response can be built.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is unknown.
    /// Returns [`AppError::Gone`] if the record has been deactivated.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve_active(&self, short_id: &str) -> Result<ShortUrl, AppError> {
        let url = find_short_url(self.url_repository.as_ref(), short_id).await?;

        if url.is_deleted() {
            return Err(AppError::gone(
                "Short URL has been deleted",
                json!({ "short_id": short_id }),
            ));
        }

        Ok(url)
    }

    /// Appends one access log entry for a successful redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_access(&self, url: &ShortUrl, client_info: String) -> Result<(), AppError> {
        self.access_log_repository
            .record(NewAccessLog {
                url_id: url.id,
                client_info,
            })
            .await?;

        Ok(())
    }

    /// Retrieves a record (active or inactive) by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is unknown.
    pub async fn get_by_short_id(&self, short_id: &str) -> Result<ShortUrl, AppError> {
        find_short_url(self.url_repository.as_ref(), short_id).await
    }

    /// Soft-deletes a short URL.
    ///
    /// Deleting an already inactive record succeeds again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn deactivate(&self, short_id: &str) -> Result<(), AppError> {
        if is_well_formed(short_id) && self.url_repository.deactivate(short_id).await? {
            info!(short_id = %short_id, "Short URL deactivated");
            return Ok(());
        }

        Err(not_found(short_id))
    }

    /// Lists the most recently created records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        self.url_repository.list_recent(limit).await
    }
}

/// Builds the public short URL from a base URL and identifier.
pub fn build_short_url(base_url: &str, short_id: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), short_id)
}

/// Looks up a record by short identifier, mapping absence to not-found.
///
/// Identifiers that cannot have been issued are rejected without a query.
pub(crate) async fn find_short_url<U: UrlRepository + ?Sized>(
    repository: &U,
    short_id: &str,
) -> Result<ShortUrl, AppError> {
    if !is_well_formed(short_id) {
        return Err(not_found(short_id));
    }

    repository
        .find_by_short_id(short_id)
        .await?
        .ok_or_else(|| not_found(short_id))
}

fn not_found(short_id: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "short_id": short_id }))
}
