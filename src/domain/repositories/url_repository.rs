//! Repository trait for URL record data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Reserves the next record id from the `urls` id sequence.
    ///
    /// Reserved ids are never handed out twice, even if the subsequent insert
    /// does not happen.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn reserve_id(&self) -> Result<i64, AppError>;

    /// Inserts a URL record with a pre-reserved id and derived short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if the record was written
    /// - `Ok(None)` if another record already holds the same `original_url`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record (active or inactive) by its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record (active or inactive) by its destination URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<ShortUrl>, AppError>;

    /// Marks a record inactive.
    ///
    /// Returns `Ok(true)` if a record with this short id exists (whether or not
    /// it was already inactive), `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, short_id: &str) -> Result<bool, AppError>;

    /// Lists the most recently created records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError>;
}
