//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and give HTTP handlers a small,
//! intention-revealing API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening, resolution, store probe
//! - [`services::stats_service::StatsService`] - Per-link statistics and listing

pub mod services;
