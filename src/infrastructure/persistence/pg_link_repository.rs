//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

const LINK_COLUMNS: &str = "id, short_code, original_url, clicks, created_at";

/// Row shape of the `urls` table.
#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.short_code,
            row.original_url,
            row.clicks,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for the `urls` table.
///
/// Uses bound parameters for every value; the pool is shared with the rest
/// of the service.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let query = format!(
            "INSERT INTO urls (short_code, original_url, clicks, created_at) \
             VALUES ($1, $2, 0, NOW()) \
             RETURNING {LINK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, LinkRow>(&query)
            .bind(&new_link.short_code)
            .bind(&new_link.original_url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_code(&e) {
                    warn!(short_code = %new_link.short_code, "Short code collision");
                    AppError::internal("Short code already exists")
                } else {
                    AppError::from(e)
                }
            })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let query = format!("SELECT {LINK_COLUMNS} FROM urls WHERE short_code = $1");

        let row = sqlx::query_as::<_, LinkRow>(&query)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let query = format!(
            "SELECT {LINK_COLUMNS} FROM urls WHERE original_url = $1 ORDER BY id LIMIT 1"
        );

        let row = sqlx::query_as::<_, LinkRow>(&query)
            .bind(original_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let query =
            format!("SELECT {LINK_COLUMNS} FROM urls ORDER BY created_at DESC, id DESC LIMIT $1");

        let rows = sqlx::query(&query)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .iter()
            .filter_map(|row| match LinkRow::from_row(row) {
                Ok(link) => Some(link.into()),
                Err(e) => {
                    debug!(error = %e, "Skipping undecodable row");
                    None
                }
            })
            .collect())
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
