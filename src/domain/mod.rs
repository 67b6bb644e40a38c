//! Domain layer containing business entities and logic.
//!
//! It defines the short link entity, the repository interface, and the click
//! queue, independent of the PostgreSQL implementation.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click queue message
//! - [`click_worker`] - Background worker draining the click queue
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves a short code and answers immediately
//! 2. A [`click_event::ClickEvent`] is pushed onto a bounded channel without waiting
//! 3. [`click_worker::run_click_worker`] increments the counter via
//!    [`repositories::LinkRepository::increment_clicks`]
//!
//! Clicks are best-effort: a full queue or a failed update loses the click.

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
