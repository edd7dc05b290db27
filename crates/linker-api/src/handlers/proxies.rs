//! Proxy link handlers
//!
//! Reads are open to any signed-in user; writes require an admin.

use axum::{extract::State, Json};
use linker_service::dto::{
    CreateProxyRequest, ProxiesResponse, ProxyEnvelope, SuccessResponse, UpdateProxyRequest,
};
use linker_service::ProxyService;

use crate::extractors::{AdminUser, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List proxies (non-admins only see ACTIVE ones)
///
/// GET /api/proxies
pub async fn list_proxies(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProxiesResponse>> {
    let service = ProxyService::new(state.service_context());
    let response = service.list_proxies(auth.role).await?;
    Ok(Json(response))
}

/// POST /api/proxies
pub async fn create_proxy(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    ValidatedJson(request): ValidatedJson<CreateProxyRequest>,
) -> ApiResult<Created<Json<ProxyEnvelope>>> {
    let service = ProxyService::new(state.service_context());
    let response = service.create_proxy(admin.role, request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/proxies/{id}
pub async fn get_proxy(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(proxy_id): IdPath,
) -> ApiResult<Json<ProxyEnvelope>> {
    let service = ProxyService::new(state.service_context());
    let response = service.get_proxy(auth.role, proxy_id).await?;
    Ok(Json(response))
}

/// PUT /api/proxies/{id}
pub async fn update_proxy(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    IdPath(proxy_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateProxyRequest>,
) -> ApiResult<Json<ProxyEnvelope>> {
    let service = ProxyService::new(state.service_context());
    let response = service.update_proxy(admin.role, proxy_id, request).await?;
    Ok(Json(response))
}

/// DELETE /api/proxies/{id}
pub async fn delete_proxy(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    IdPath(proxy_id): IdPath,
) -> ApiResult<Json<SuccessResponse>> {
    let service = ProxyService::new(state.service_context());
    let response = service.delete_proxy(admin.role, proxy_id).await?;
    Ok(Json(response))
}
