//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::location::location_header;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Codes containing `.` (e.g. `favicon.ico`) get an empty 404
/// 2. Look up the link by code
/// 3. Build the `Location` header (control characters in the stored URL
///    are replaced or percent-encoded)
/// 4. Send click event to background worker
/// 5. Return 301 Moved Permanently
///
/// # Click Tracking
///
/// Click events are sent to a bounded channel for async processing.
/// If the queue is full or closed, the click is dropped and logged.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the lookup fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if code.contains('.') {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let link = state.link_service.resolve(&code).await?;

    let location = location_header(&link.original_url).map_err(|e| {
        error!(short_code = %link.short_code, error = %e, "Unusable redirect target");
        AppError::internal("Invalid redirect target")
    })?;

    if let Err(e) = state.click_sender.try_send(ClickEvent::new(code)) {
        warn!(short_code = %link.short_code, error = %e, "Dropped click event");
    }

    // 301, not the 308 that Redirect::permanent produces
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
