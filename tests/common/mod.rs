#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use shorty::domain::click_event::ClickEvent;
use shorty::domain::entities::{Link, NewLink};
use shorty::domain::repositories::LinkRepository;
use shorty::error::AppError;
use shorty::routes::app_router;
use shorty::state::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// `LinkRepository` backed by a vector, with a switch that makes every call fail.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    failing: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Inserts a link directly, bypassing the service.
    pub fn insert(&self, code: &str, url: &str, clicks: i64) -> Link {
        let mut links = self.links.lock().unwrap();
        let id = links.len() as i64 + 1;
        let link = Link::new(id, code.to_string(), url.to_string(), clicks, created_at(id));
        links.push(link.clone());
        link
    }

    pub fn get(&self, code: &str) -> Option<Link> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_code == code)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::internal("Database error"))
        } else {
            Ok(())
        }
    }
}

/// Strictly increasing timestamps so ordering by `created_at` is deterministic.
fn created_at(id: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(id)
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.short_code == new_link.short_code) {
            return Err(AppError::internal("Short code already exists"));
        }
        let id = links.len() as i64 + 1;
        let link = Link::new(
            id,
            new_link.short_code,
            new_link.original_url,
            0,
            created_at(id),
        );
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self.get(code))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        self.check()?;
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.original_url == original_url)
            .cloned())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        links.truncate(limit as usize);
        Ok(links)
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        self.check()?;
        let mut links = self.links.lock().unwrap();
        match links.iter_mut().find(|l| l.short_code == code) {
            Some(link) => {
                link.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

pub fn create_test_state(
    repository: Arc<InMemoryLinkRepository>,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    create_test_state_with_base_url(repository, None)
}

pub fn create_test_state_with_base_url(
    repository: Arc<InMemoryLinkRepository>,
    base_url: Option<&str>,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(repository, tx, base_url.map(str::to_string));
    (state, rx)
}

/// Full application router over a fresh in-memory store.
pub fn create_test_app() -> (
    axum::Router,
    Arc<InMemoryLinkRepository>,
    mpsc::Receiver<ClickEvent>,
) {
    let repository = InMemoryLinkRepository::new();
    let (state, rx) = create_test_state(repository.clone());
    (app_router(state), repository, rx)
}
