//! CLI administration tool for shorty.
//!
//! Provides commands for inspecting links and performing database
//! operations without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the most recent links
//! cargo run --bin admin -- links --limit 20
//!
//! # Show one link
//! cargo run --bin admin -- stats aZ3k9Q
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! The database is resolved the same way as for the server: `DATABASE_URL`,
//! then `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`, then the local
//! development default.

use shorty::application::services::StatsService;
use shorty::application::services::stats_service::LIST_LIMIT;
use shorty::config::{Config, mask_connection_string};
use shorty::domain::entities::Link;
use shorty::error::AppError;
use shorty::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorty.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List the most recent links
    Links {
        /// Number of links to show (at most 100)
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Show the record for one short code
    Stats {
        /// Short code to look up
        code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&config.database_url)
            )
        })?;

    match cli.command {
        Commands::Links { limit } => handle_links(&pool, limit).await?,
        Commands::Stats { code } => handle_stats(&pool, &code).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn stats_service(pool: &PgPool) -> StatsService {
    StatsService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
}

/// Prints the most recent links as a table.
///
/// # Output Format
///
/// ```text
/// Recent links
///
///   Code       Clicks   Created            URL
///   ──────────────────────────────────────────────────────────────
///   aZ3k9Q     42       2025-01-15 10:30   https://example.com
/// ```
async fn handle_links(pool: &PgPool, limit: usize) -> Result<()> {
    println!("{}", "Recent links".bright_blue().bold());
    println!();

    let links = stats_service(pool)
        .list_recent()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    let shown = limit.min(LIST_LIMIT as usize);

    println!(
        "  {:<10} {:<8} {:<18} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in links.iter().take(shown) {
        println!(
            "  {:<10} {:<8} {:<18} {}",
            link.short_code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!(
        "  Showing: {}",
        links.len().min(shown).to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the full record for one short code.
async fn handle_stats(pool: &PgPool, code: &str) -> Result<()> {
    match stats_service(pool).get_stats(code).await {
        Ok(link) => {
            print_link(&link);
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "No link with code".yellow(), code.cyan());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to load link: {}", e)),
    }
}

fn print_link(link: &Link) {
    println!("{}", "Link".bright_blue().bold());
    println!();
    println!("  ID:       {}", link.id.to_string().bright_black());
    println!("  Code:     {}", link.short_code.cyan());
    println!("  URL:      {}", link.original_url);
    println!(
        "  Clicks:   {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!(
        "  Created:  {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let (links, clicks): (i64, i64) =
                sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(clicks), 0)::BIGINT FROM urls")
                    .fetch_one(pool)
                    .await
                    .context("Failed to count links")?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!("  Clicks:     {}", clicks.to_string().bright_green().bold());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run database migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
