//! Authentication service
//!
//! Handles login and token verification.

use linker_common::AppError;
use linker_core::entities::{User, UserStatus};
use linker_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{LoginRequest, LoginResponse, UserEnvelope, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::verify_password_blocking;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    ///
    /// Only APPROVED accounts receive a token; other statuses are rejected
    /// with a status-specific message once the password has been checked.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let username = request.username.trim();
        if username.is_empty() || request.password.is_empty() {
            return Err(ServiceError::validation("Username and password are required"));
        }

        let user = self.ctx.user_repo().find_by_username(username).await?;

        let password_hash = match &user {
            Some(user) => self.ctx.user_repo().get_password_hash(user.id).await?,
            None => None,
        };

        // Unknown accounts still pay for a hash check
        let verified = verify_password_blocking(request.password, password_hash).await?;

        let user = match user {
            Some(user) if verified => user,
            Some(user) => {
                warn!(user_id = %user.id, "Login failed: invalid password");
                return Err(ServiceError::App(AppError::InvalidCredentials));
            }
            None => {
                warn!("Login failed: user not found");
                return Err(ServiceError::App(AppError::InvalidCredentials));
            }
        };

        user.status.ensure_can_authenticate().map_err(|e| {
            warn!(user_id = %user.id, status = %user.status, "Login refused: account not approved");
            ServiceError::from(e)
        })?;

        let token = self
            .ctx
            .jwt_service()
            .issue(user.id, &user.username, user.role)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse::new(token, UserResponse::from(&user)))
    }

    /// Resolve the account behind an already validated token
    #[instrument(skip(self))]
    pub async fn verify(&self, user_id: Uuid) -> ServiceResult<UserEnvelope> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserEnvelope {
            user: UserResponse::from(user),
        })
    }

    /// Load the account behind a token and require an approved admin
    ///
    /// The stored role and status decide, so a demoted or suspended admin is
    /// refused while their token is still valid.
    #[instrument(skip(self))]
    pub async fn authorize_admin(&self, user_id: Uuid) -> ServiceResult<User> {
        match self.ctx.user_repo().find_by_id(user_id).await? {
            Some(user) if user.is_admin() && user.status == UserStatus::Approved => Ok(user),
            Some(user) => {
                warn!(
                    user_id = %user.id,
                    role = %user.role,
                    status = %user.status,
                    "Admin access refused"
                );
                Err(DomainError::AdminRequired.into())
            }
            None => {
                warn!("Admin access refused: account no longer exists");
                Err(DomainError::AdminRequired.into())
            }
        }
    }
}
