//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Handles passed to handlers through axum's `State` extractor.
///
/// Cloning is cheap: services are behind `Arc` and the click sender is a
/// channel handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Public prefix for short URLs; derived from request headers when unset.
    pub base_url: Option<String>,
}

impl AppState {
    /// Builds the services over a single repository.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        click_sender: mpsc::Sender<ClickEvent>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository)),
            click_sender,
            base_url,
        }
    }
}
