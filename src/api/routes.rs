//! API route configuration.
//!
//! Mounted under `/api` by [`crate::routes::app_router`]. No endpoint
//! requires authentication.

use crate::api::handlers::{health_handler, list_urls_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Shorten a URL (or return the existing link)
/// - `GET  /stats/{code}`  - Click statistics for one short code
/// - `GET  /urls`          - The 100 most recent links
/// - `GET  /health`        - Database connectivity check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/urls", get(list_urls_handler))
        .route("/health", get(health_handler))
}
