//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound parameters.
//!
//! # Repositories
//!
//! - [`PgUrlRepository`] - URL record storage and retrieval
//! - [`PgAccessLogRepository`] - Access log append and aggregation
//! - [`PgHealthRepository`] - Liveness round-trip with failure classification
//!
//! [`database`] owns the pool lifecycle (connect, migrate, close).

pub mod database;
pub mod pg_access_log_repository;
pub mod pg_health_repository;
pub mod pg_url_repository;

pub use pg_access_log_repository::PgAccessLogRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_url_repository::PgUrlRepository;
