//! PostgreSQL implementation of URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_id: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for ShortUrl {
    fn from(r: UrlRow) -> Self {
        ShortUrl::new(r.id, r.original_url, r.short_id, r.is_active, r.created_at)
    }
}

/// PostgreSQL repository for URL records.
///
/// Uses SQLx prepared statements for SQL injection protection.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn reserve_id(&self) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar("SELECT nextval(pg_get_serial_sequence('urls', 'id'))")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    async fn insert(&self, new_url: NewShortUrl) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (id, original_url, short_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (original_url) DO NOTHING
            RETURNING id, original_url, short_id, is_active, created_at
            "#,
        )
        .bind(new_url.id)
        .bind(&new_url.original_url)
        .bind(&new_url.short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_id, is_active, created_at
            FROM urls
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_id, is_active, created_at
            FROM urls
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortUrl::from))
    }

    async fn deactivate(&self, short_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET is_active = FALSE WHERE short_id = $1")
            .bind(short_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_id, is_active, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortUrl::from).collect())
    }
}
