//! Usage statistics service for short URLs.

use std::sync::Arc;

use crate::application::services::url_service::find_short_url;
use crate::domain::entities::{AccessLog, ShortUrl};
use crate::domain::repositories::{AccessLogRepository, UrlRepository};
use crate::error::AppError;

/// Default number of log entries returned with full detail.
pub const DEFAULT_MAX_RESULT: i64 = 10;

/// Default number of newest log entries skipped.
pub const DEFAULT_OFFSET: i64 = 0;

/// Options for a usage report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageQuery {
    /// When true, the report includes individual log entries.
    pub full_info: bool,
    /// Page size for log entries. Not capped.
    pub max_result: i64,
    pub offset: i64,
}

impl Default for UsageQuery {
    fn default() -> Self {
        Self {
            full_info: false,
            max_result: DEFAULT_MAX_RESULT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Access statistics for one short URL.
#[derive(Debug, Clone)]
pub struct UsageReport {
    pub url: ShortUrl,
    pub total: i64,
    /// Newest-first log page; `None` unless full detail was requested.
    pub logs: Option<Vec<AccessLog>>,
}

/// Service for reporting how often short URLs have been accessed.
///
/// Reports are available for inactive records too, so the history of a
/// deleted short URL stays visible.
pub struct UsageService<U: UrlRepository, L: AccessLogRepository> {
    url_repository: Arc<U>,
    access_log_repository: Arc<L>,
}

impl<U: UrlRepository, L: AccessLogRepository> UsageService<U, L> {
    /// Creates a new usage service.
    pub fn new(url_repository: Arc<U>, access_log_repository: Arc<L>) -> Self {
        Self {
            url_repository,
            access_log_repository,
        }
    }

    /// Builds the usage report for a short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is unknown, rather than
    /// a zero count.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_usage(&self, short_id: &str, query: UsageQuery) -> Result<UsageReport, AppError> {
        let url = find_short_url(self.url_repository.as_ref(), short_id).await?;

        let total = self.access_log_repository.count_by_url_id(url.id).await?;

        let logs = if query.full_info {
            Some(
                self.access_log_repository
                    .list_by_url_id(url.id, query.max_result, query.offset)
                    .await?,
            )
        } else {
            None
        };

        Ok(UsageReport { url, total, logs })
    }
}
