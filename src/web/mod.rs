//! Browser-facing pages.
//!
//! Serves the single-page front end that calls the JSON API. Uses Askama
//! templates compiled from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
