//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL pool lifecycle and repository implementations

pub mod persistence;
