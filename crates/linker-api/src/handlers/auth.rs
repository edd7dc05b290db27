//! Authentication handlers
//!
//! Endpoints for login and token verification.

use axum::{extract::State, Json};
use linker_service::dto::{LoginRequest, LoginResponse, UserEnvelope};
use linker_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Login with username and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Return the account behind the presented token
///
/// POST /api/auth/verify
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserEnvelope>> {
    let service = AuthService::new(state.service_context());
    let response = service.verify(auth.user_id).await?;
    Ok(Json(response))
}
