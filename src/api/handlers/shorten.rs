//! Handler for link shortening endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_url::build_short_url;

/// Creates a short link for a long URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://localhost:8080/aZ3k9Q",
///   "short_code": "aZ3k9Q",
///   "original_url": "https://example.com/some/page"
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: A new link was stored
/// - **200 OK**: The normalized URL was already shortened
///
/// The body is decoded as JSON whatever its `Content-Type`, so form-encoded
/// `curl -d` posts and `text/plain` browser requests are accepted.
///
/// # Errors
///
/// Returns 400 Bad Request with `URL is required` if the body is not valid
/// JSON or `url` is missing or empty.
/// Returns 500 Internal Server Error if code generation or the insert fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejected shorten body");
        AppError::bad_request("URL is required")
    })?;

    payload.validate()?;

    let outcome = state.link_service.shorten(&payload.url).await?;

    let status = if outcome.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let link = outcome.link();
    let short_url = build_short_url(&headers, state.base_url.as_deref(), &link.short_code);

    Ok((
        status,
        Json(ShortenResponse {
            short_url,
            short_code: link.short_code.clone(),
            original_url: link.original_url.clone(),
        }),
    ))
}
