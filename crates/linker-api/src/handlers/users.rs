//! User handlers
//!
//! Endpoints for account listing, registration and administration.

use axum::{extract::State, Json};
use linker_service::dto::{CreateUserRequest, UpdateUserRequest, UserEnvelope, UsersResponse};
use linker_service::UserService;

use crate::extractors::{AdminUser, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List all users
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<UsersResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.list_users().await?;
    Ok(Json(response))
}

/// Register a new account (no token required)
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserEnvelope>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(request).await?;
    Ok(Created(Json(response)))
}

/// Get user by ID
///
/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Change an account's status or role
///
/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserEnvelope>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(admin.role, user_id, request).await?;
    Ok(Json(response))
}
