//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A mapping from a short identifier to its destination
//! - [`AccessLog`] - A successful redirect of a short URL
//!
//! Each entity has a companion `New*` struct used for inserts.

pub mod access_log;
pub mod short_url;

pub use access_log::{AccessLog, NewAccessLog};
pub use short_url::{NewShortUrl, ShortUrl};
