//! Access log entity representing a single successful redirect.

use chrono::{DateTime, Utc};

/// A log entry recorded when a short URL is resolved and redirected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLog {
    pub id: i64,
    pub url_id: i64,
    pub client_info: String,
    pub accessed_at: DateTime<Utc>,
}

impl AccessLog {
    /// Creates a new AccessLog instance.
    pub fn new(id: i64, url_id: i64, client_info: String, accessed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            url_id,
            client_info,
            accessed_at,
        }
    }
}

/// Input data for appending an access log entry.
///
/// The `url_id` must reference an existing URL record; the timestamp is set
/// by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccessLog {
    pub url_id: i64,
    pub client_info: String,
}
