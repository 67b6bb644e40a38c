//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::error;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports whether the database is reachable.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: `{"status":"healthy"}`
/// - **503 Service Unavailable**:
///   `{"status":"unhealthy","error":"Database connection failed"}`
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    match state.link_service.check_store().await {
        Ok(()) => Ok(Json(HealthResponse::healthy())),
        Err(e) => {
            error!(error = %e, "Health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy("Database connection failed")),
            ))
        }
    }
}
