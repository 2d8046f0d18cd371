//! Persistence liveness probe service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::repositories::{HealthRepository, ProbeError};

/// Service checking that the database answers queries.
pub struct HealthService<H: HealthRepository> {
    repository: Arc<H>,
}

impl<H: HealthRepository> HealthService<H> {
    /// Creates a new health service.
    pub fn new(repository: Arc<H>) -> Self {
        Self { repository }
    }

    /// Runs the liveness round-trip.
    ///
    /// Failures are logged and returned as a classified [`ProbeError`]; they
    /// never escape as a panic or an unhandled error.
    pub async fn check(&self) -> Result<DateTime<Utc>, ProbeError> {
        self.repository.now().await.inspect_err(|e| {
            tracing::warn!(category = e.label(), error = %e, "Database liveness probe failed");
        })
    }
}
