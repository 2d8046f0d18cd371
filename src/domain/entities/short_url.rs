//! Short URL entity representing a mapping from a short identifier to a destination.

use chrono::{DateTime, Utc};

/// A stored URL mapping.
///
/// Records are never physically removed; deletion clears `is_active` so the
/// access history stays attached to its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_id: String,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_id,
            is_active,
            created_at,
        }
    }

    /// Returns true if the mapping has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        !self.is_active
    }
}

/// Input data for inserting a URL record.
///
/// The id is reserved from the table sequence before insertion so the
/// `short_id` can be derived and written in the same statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_id: String,
}
