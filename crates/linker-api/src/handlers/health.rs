//! Health check handlers
//!
//! Endpoints for liveness and readiness checks.

use axum::{extract::State, http::StatusCode, Json};
use linker_service::dto::{HealthResponse, ReadinessResponse};
use linker_service::HealthService;

use crate::state::AppState;

/// Basic health check (liveness)
///
/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = HealthService::new(state.service_context());
    Json(service.liveness(&state.config().app.name, state.uptime_secs()))
}

/// Readiness check with database connectivity
///
/// GET /api/health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let service = HealthService::new(state.service_context());
    let response = service.readiness().await;

    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
