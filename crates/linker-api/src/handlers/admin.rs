//! Admin handlers

use axum::{extract::State, Json};
use linker_service::dto::StatsResponse;
use linker_service::AdminService;

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Aggregate counts for the dashboard
///
/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
) -> ApiResult<Json<StatsResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.stats(admin.role).await?;
    Ok(Json(response))
}
