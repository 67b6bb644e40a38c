//! Link creation and resolution service.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;

/// Result of a shorten request.
#[derive(Debug, Clone, PartialEq)]
pub enum ShortenOutcome {
    /// A new link was inserted.
    Created(Link),
    /// The normalized URL was already shortened; the existing link is returned.
    Existing(Link),
}

impl ShortenOutcome {
    /// The link, whichever way it was obtained.
    pub fn link(&self) -> &Link {
        match self {
            ShortenOutcome::Created(link) | ShortenOutcome::Existing(link) => link,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ShortenOutcome::Created(_))
    }
}

/// Service for creating and resolving short links.
///
/// Handles URL normalization, duplicate detection, and code generation.
/// Duplicate detection is a plain lookup before the insert, so two concurrent
/// requests for the same new URL may both create a link.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Shortens `url`, reusing an existing link for the same normalized URL.
    ///
    /// A failed duplicate lookup is logged and treated as a miss. A generated
    /// code that collides with an existing one is not retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] with `Failed to generate short code` if
    /// the random source fails, or `Failed to save URL` if the insert fails.
    pub async fn shorten(&self, url: &str) -> Result<ShortenOutcome, AppError> {
        let original_url = normalize_url(url);

        match self.repository.find_by_original_url(&original_url).await {
            Ok(Some(existing)) => return Ok(ShortenOutcome::Existing(existing)),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Duplicate lookup failed, creating a new link"),
        }

        let short_code = generate_code().map_err(|e| {
            error!(error = %e, "Short code generation failed");
            AppError::internal("Failed to generate short code")
        })?;

        let new_link = NewLink {
            short_code,
            original_url,
        };

        let link = self.repository.create(new_link).await.map_err(|e| {
            error!(error = %e, "Failed to insert link");
            AppError::internal("Failed to save URL")
        })?;

        info!(short_code = %link.short_code, "Short link created");

        Ok(ShortenOutcome::Created(link))
    }

    /// Resolves a short code to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))
    }

    /// Probes the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
