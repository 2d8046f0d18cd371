//! CLI administration tool for short-url.
//!
//! Runs the same operations as the HTTP API directly against the database,
//! for operators without HTTP access.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin short-url-admin -- db check
//!
//! # Shorten a URL
//! cargo run --bin short-url-admin -- create https://example.com
//!
//! # Usage statistics with the latest 20 accesses
//! cargo run --bin short-url-admin -- stats Xy3_kQ9 --full --limit 20
//!
//! # Soft-delete a short URL
//! cargo run --bin short-url-admin -- delete Xy3_kQ9
//!
//! # Most recently created short URLs
//! cargo run --bin short-url-admin -- list --limit 10
//! ```
//!
//! # Environment Variables
//!
//! Reads the same configuration as the server (`DATABASE_URL` or `DB_*`,
//! pool limits, `PUBLIC_BASE_URL`).

use short_url::application::services::url_service::build_short_url;
use short_url::application::services::usage_service::{DEFAULT_MAX_RESULT, DEFAULT_OFFSET};
use short_url::application::services::{HealthService, UrlService, UsageQuery, UsageService};
use short_url::config::{self, Config};
use short_url::infrastructure::persistence::{
    PgAccessLogRepository, PgHealthRepository, PgUrlRepository, database,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

type PgUrlService = UrlService<PgUrlRepository, PgAccessLogRepository>;

/// CLI tool for managing short-url.
#[derive(Parser)]
#[command(name = "short-url-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Create a short URL (returns the existing one for a known URL)
    Create {
        /// Destination URL (http or https)
        url: String,
    },

    /// Soft-delete a short URL
    Delete {
        /// Short identifier
        short_id: String,
    },

    /// Show usage statistics for a short URL
    Stats {
        /// Short identifier
        short_id: String,

        /// Include individual access log entries
        #[arg(short, long)]
        full: bool,

        /// Number of log entries to show
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULT as u32)]
        limit: u32,

        /// Number of newest log entries to skip
        #[arg(short, long, default_value_t = DEFAULT_OFFSET as u32)]
        offset: u32,
    },

    /// List the most recently created short URLs
    List {
        #[arg(short, long, default_value_t = 20)]
        limit: u32,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Run the liveness probe
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = Arc::new(database::connect(&config).await?);

    let result = dispatch(cli.command, pool.clone(), &config).await;

    database::close(&pool).await;
    result
}

async fn dispatch(command: Commands, pool: Arc<PgPool>, config: &Config) -> Result<()> {
    match command {
        Commands::Db { action } => match action {
            DbAction::Check => check_database(pool).await,
        },
        Commands::Create { url } => create(url_service(pool), &url, config).await,
        Commands::Delete { short_id } => delete(url_service(pool), &short_id).await,
        Commands::Stats {
            short_id,
            full,
            limit,
            offset,
        } => {
            let query = UsageQuery {
                full_info: full,
                max_result: i64::from(limit),
                offset: i64::from(offset),
            };
            stats(pool, &short_id, query).await
        }
        Commands::List { limit } => list(url_service(pool), i64::from(limit), config).await,
    }
}

fn url_service(pool: Arc<PgPool>) -> PgUrlService {
    UrlService::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgAccessLogRepository::new(pool)),
    )
}

/// Runs `SELECT NOW()` and reports the probe classification on failure.
async fn check_database(pool: Arc<PgPool>) -> Result<()> {
    println!("{}", "Checking database connection...".bright_blue());

    let service = HealthService::new(Arc::new(PgHealthRepository::new(pool)));

    match service.check().await {
        Ok(time) => {
            println!("{}", "Database available".green().bold());
            println!("  Server time: {}", time.to_rfc3339().bright_white());
            Ok(())
        }
        Err(e) => {
            println!("{}", "Database unavailable".red().bold());
            println!("  Error:  {}", e.label().yellow());
            println!("  Detail: {}", e.to_string().bright_black());
            Err(e.into())
        }
    }
}

async fn create(service: PgUrlService, url: &str, config: &Config) -> Result<()> {
    let created = service.create_short_url(url).await?;

    println!("{}", "Short URL ready".green().bold());
    println!("  Short ID: {}", created.short_id.bright_yellow().bold());
    println!("  URL:      {}", created.original_url.cyan());

    if let Some(ref base) = config.public_base_url {
        println!(
            "  Link:     {}",
            build_short_url(base, &created.short_id).bright_cyan()
        );
    }

    Ok(())
}

async fn delete(service: PgUrlService, short_id: &str) -> Result<()> {
    service.deactivate(short_id).await?;

    println!(
        "{} {}",
        "Short URL deleted:".green().bold(),
        short_id.bright_yellow()
    );

    Ok(())
}

/// Prints the total access count and, with `--full`, a page of log entries.
///
/// # Output Format
///
/// ```text
/// Usage of Xy3_kQ9
///   URL:    https://example.com
///   Status: ACTIVE
///   Total:  2
///
///   Accessed at           Client
///   2026-01-01 10:00:05   203.0.113.7
/// ```
async fn stats(pool: Arc<PgPool>, short_id: &str, query: UsageQuery) -> Result<()> {
    let service = UsageService::new(
        Arc::new(PgUrlRepository::new(pool.clone())),
        Arc::new(PgAccessLogRepository::new(pool)),
    );

    let report = service.get_usage(short_id, query).await?;

    let status = if report.url.is_deleted() {
        "DELETED".red()
    } else {
        "ACTIVE".green()
    };

    println!(
        "{} {}",
        "Usage of".bright_blue().bold(),
        report.url.short_id.bright_yellow()
    );
    println!("  URL:    {}", report.url.original_url.cyan());
    println!("  Status: {}", status);
    println!(
        "  Total:  {}",
        report.total.to_string().bright_white().bold()
    );

    if let Some(logs) = report.logs {
        println!();

        if logs.is_empty() {
            println!("{}", "  No accesses in this range".yellow());
            return Ok(());
        }

        println!(
            "  {:<21} {}",
            "Accessed at".bright_white().bold(),
            "Client".bright_white().bold()
        );

        for log in &logs {
            println!(
                "  {:<21} {}",
                log.accessed_at
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
                    .bright_black(),
                log.client_info
            );
        }
    }

    Ok(())
}

async fn list(service: PgUrlService, limit: i64, config: &Config) -> Result<()> {
    println!("{}", "Recent short URLs".bright_blue().bold());
    println!();

    let urls = service.list_recent(limit).await?;

    if urls.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<17} {:<8} {}",
        "Short ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );

    for url in &urls {
        let status = if url.is_deleted() {
            "DELETED".red()
        } else {
            "ACTIVE".green()
        };

        let target = match config.public_base_url {
            Some(ref base) => format!(
                "{} -> {}",
                build_short_url(base, &url.short_id),
                url.original_url
            ),
            None => url.original_url.clone(),
        };

        println!(
            "  {:<12} {:<17} {:<8} {}",
            url.short_id.bright_yellow(),
            url.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status,
            target.cyan()
        );
    }

    println!();
    println!("  Total: {}", urls.len().to_string().bright_white().bold());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_defaults() {
        let cli = Cli::try_parse_from(["short-url-admin", "stats", "AAAAAAA"]).unwrap();

        match cli.command {
            Commands::Stats {
                full,
                limit,
                offset,
                ..
            } => {
                assert!(!full);
                assert_eq!(i64::from(limit), DEFAULT_MAX_RESULT);
                assert_eq!(i64::from(offset), DEFAULT_OFFSET);
            }
            _ => panic!("expected stats command"),
        }
    }

    #[test]
    fn test_negative_limits_rejected() {
        assert!(Cli::try_parse_from(["short-url-admin", "stats", "AAAAAAA", "--limit", "-1"]).is_err());
        assert!(Cli::try_parse_from(["short-url-admin", "stats", "AAAAAAA", "--offset", "-5"]).is_err());
        assert!(Cli::try_parse_from(["short-url-admin", "list", "--limit", "-1"]).is_err());
    }
}
