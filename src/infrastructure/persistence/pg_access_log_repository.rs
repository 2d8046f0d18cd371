//! PostgreSQL implementation of access log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AccessLog, NewAccessLog};
use crate::domain::repositories::AccessLogRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct AccessLogRow {
    id: i64,
    url_id: i64,
    client_info: String,
    accessed_at: DateTime<Utc>,
}

impl From<AccessLogRow> for AccessLog {
    fn from(r: AccessLogRow) -> Self {
        AccessLog::new(r.id, r.url_id, r.client_info, r.accessed_at)
    }
}

/// PostgreSQL repository for access logs.
pub struct PgAccessLogRepository {
    pool: Arc<PgPool>,
}

impl PgAccessLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessLogRepository for PgAccessLogRepository {
    async fn record(&self, new_log: NewAccessLog) -> Result<AccessLog, AppError> {
        let row = sqlx::query_as::<_, AccessLogRow>(
            r#"
            INSERT INTO access_logs (url_id, client_info)
            VALUES ($1, $2)
            RETURNING id, url_id, client_info, accessed_at
            "#,
        )
        .bind(new_log.url_id)
        .bind(&new_log.client_info)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_by_url_id(&self, url_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM access_logs WHERE url_id = $1")
            .bind(url_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_by_url_id(
        &self,
        url_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AccessLog>, AppError> {
        let rows = sqlx::query_as::<_, AccessLogRow>(
            r#"
            SELECT id, url_id, client_info, accessed_at
            FROM access_logs
            WHERE url_id = $1
            ORDER BY accessed_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(url_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(AccessLog::from).collect())
    }
}
