//! Connection pool lifecycle.
//!
//! The pool is created once at startup, handed to repositories, and closed
//! explicitly after the server has drained in-flight requests.

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

/// Opens the PostgreSQL connection pool using the configured limits.
///
/// # Errors
///
/// Returns an error if the initial connection cannot be established.
pub async fn connect(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Connected to database"
    );

    Ok(pool)
}

/// Applies the embedded schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");
    Ok(())
}

/// Closes every pooled connection and waits for them to finish.
pub async fn close(pool: &PgPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}
