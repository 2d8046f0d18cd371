//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules, and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Short URL creation, redirect resolution, and soft-delete
//! - [`services::usage_service::UsageService`] - Access counts and log listings
//! - [`services::health_service::HealthService`] - Database liveness probe

pub mod services;
