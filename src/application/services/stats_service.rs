//! Link statistics and listing service.

use std::sync::Arc;

use tracing::error;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Maximum number of links returned by [`StatsService::list_recent`].
pub const LIST_LIMIT: i64 = 100;

/// Service for reading click counters and recent links.
pub struct StatsService {
    repository: Arc<dyn LinkRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves the full record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_stats(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Returns the [`LIST_LIMIT`] most recently created links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] with `Failed to fetch URLs` if the
    /// query fails. Individual undecodable rows are skipped by the repository.
    pub async fn list_recent(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_recent(LIST_LIMIT).await.map_err(|e| {
            error!(error = %e, "Failed to list links");
            AppError::internal("Failed to fetch URLs")
        })
    }
}
