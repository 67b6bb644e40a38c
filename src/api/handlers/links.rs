//! Handler for the recent links listing.

use axum::{Json, extract::State};

use crate::api::dto::links::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recently created links, newest first.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// At most [`crate::application::services::stats_service::LIST_LIMIT`]
/// entries are returned. An empty store yields `[]`.
///
/// # Errors
///
/// Returns 500 Internal Server Error with `Failed to fetch URLs` if the
/// query fails.
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.stats_service.list_recent().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
