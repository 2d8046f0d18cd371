//! Repository trait for the persistence liveness probe.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Classified failure of a liveness round-trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// Transient connectivity failure (I/O, TLS, pool exhaustion or shutdown).
    #[error("{0}")]
    Connection(String),

    /// Failure reported by the driver or the database protocol.
    #[error("{0}")]
    Driver(String),

    #[error("{0}")]
    Unknown(String),
}

impl ProbeError {
    /// Category label reported to clients.
    pub fn label(&self) -> &'static str {
        match self {
            ProbeError::Connection(_) => "connection_error",
            ProbeError::Driver(_) => "driver_error",
            ProbeError::Unknown(_) => "unknown_error",
        }
    }
}

/// Repository interface for checking that the database answers queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial query and returns the database clock.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ProbeError`]; never panics.
    async fn now(&self) -> Result<DateTime<Utc>, ProbeError>;
}
