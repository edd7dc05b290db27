//! Authentication extractors
//!
//! Extract and validate JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use linker_core::entities::Role;
use linker_service::AuthService;
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        ApiError::MissingAuth
                    } else {
                        tracing::debug!("Authorization header is not a bearer token");
                        ApiError::InvalidToken
                    }
                })?;

        let app_state = AppState::from_ref(state);

        // Validator already logs the cause; the client only learns it was rejected
        let claims = app_state
            .jwt_service()
            .validate(bearer.token())
            .map_err(|_| ApiError::InvalidToken)?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidToken
        })?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}

/// Authenticated user whose stored account is an approved admin
///
/// The token's role claim is not trusted here; the account is reloaded and the
/// stored role replaces the claimed one.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let mut user = AuthUser::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        let account = AuthService::new(app_state.service_context())
            .authorize_admin(user.user_id)
            .await?;

        user.role = account.role;
        Ok(AdminUser(user))
    }
}
