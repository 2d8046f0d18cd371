//! Repository trait for access log storage and aggregation.

use crate::domain::entities::{AccessLog, NewAccessLog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for access logs.
///
/// Logs are append-only: there is no update or delete operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccessLogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Appends a log entry for a URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// `url_id` that does not reference an existing record.
    async fn record(&self, new_log: NewAccessLog) -> Result<AccessLog, AppError>;

    /// Counts all log entries for a URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_by_url_id(&self, url_id: i64) -> Result<i64, AppError>;

    /// Lists log entries for a URL record, newest first.
    ///
    /// # Arguments
    ///
    /// - `url_id` - Owning URL record
    /// - `limit` - Maximum number of entries
    /// - `offset` - Number of newest entries to skip
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_url_id(
        &self,
        url_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AccessLog>, AppError>;
}
