//! Background worker that applies queued click increments.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Drains the click queue until every sender is dropped.
///
/// Each event becomes one `clicks + 1` update. Failures are logged and
/// dropped; an update is never retried.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn LinkRepository>,
) {
    while let Some(event) = rx.recv().await {
        match repository.increment_clicks(&event.short_code).await {
            Ok(true) => debug!(short_code = %event.short_code, "Click recorded"),
            Ok(false) => debug!(short_code = %event.short_code, "Click for unknown code ignored"),
            Err(e) => warn!(
                short_code = %event.short_code,
                error = %e,
                "Failed to record click"
            ),
        }
    }

    info!("Click worker stopped");
}
