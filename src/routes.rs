//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /`         - Home page
//! - `GET  /{code}`   - Short link redirect
//! - `/api/*`         - JSON API (shorten, stats, listing, health)
//!
//! # Middleware
//!
//! - **CORS** - Permissive headers on every response, `OPTIONS` answered with 204
//! - **Tracing** - Structured request/response logging
//!
//! Trailing-slash normalization wraps the router in [`crate::server`], since
//! it has to run before routing.

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use crate::web;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(middleware::from_fn(cors::layer))
        .layer(tracing::layer())
}
