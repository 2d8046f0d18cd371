//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by concrete
//! repositories in `crate::infrastructure::persistence`. Mock implementations
//! are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`UrlRepository`] - URL record creation, lookup, and soft-delete
//! - [`AccessLogRepository`] - Access log append, count, and listing
//! - [`HealthRepository`] - Database liveness round-trip

pub mod access_log_repository;
pub mod health_repository;
pub mod url_repository;

pub use access_log_repository::AccessLogRepository;
pub use health_repository::{HealthRepository, ProbeError};
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use access_log_repository::MockAccessLogRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
