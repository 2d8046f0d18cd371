//! PostgreSQL implementation of the liveness probe.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{HealthRepository, ProbeError};

/// PostgreSQL liveness probe running `SELECT NOW()`.
pub struct PgHealthRepository {
    pool: Arc<PgPool>,
}

impl PgHealthRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn now(&self) -> Result<DateTime<Utc>, ProbeError> {
        sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(classify)
    }
}

/// Sorts a driver error into a probe failure category.
pub fn classify(e: sqlx::Error) -> ProbeError {
    let detail = e.to_string();

    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ProbeError::Connection(detail),

        sqlx::Error::Database(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. } => ProbeError::Driver(detail),

        _ => ProbeError::Unknown(detail),
    }
}
