//! User service
//!
//! Handles account listing, registration and administrative updates.

use linker_core::entities::{Role, User};
use linker_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserEnvelope, UserResponse, UsersResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{ensure_admin, hash_password_blocking, non_blank};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users, newest first
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<UsersResponse> {
        let users = self.ctx.user_repo().list().await?;

        Ok(UsersResponse {
            users: users.iter().map(UserResponse::from).collect(),
        })
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Uuid) -> ServiceResult<UserEnvelope> {
        let user = self.get_user_entity(user_id).await?;

        Ok(UserEnvelope {
            user: UserResponse::from(user),
        })
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: Uuid) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Register a new account
    ///
    /// The account always starts as PENDING; a requested status is ignored.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserEnvelope> {
        let username = request.username.trim();
        if username.is_empty() || request.password.is_empty() {
            return Err(ServiceError::validation("Username and password are required"));
        }

        let email = non_blank(request.email);
        let phone = non_blank(request.phone);

        if self
            .ctx
            .user_repo()
            .exists_any(username, email.as_deref(), phone.as_deref())
            .await?
        {
            warn!("Registration rejected: duplicate username, email or phone");
            return Err(DomainError::UserAlreadyExists.into());
        }

        if request.status.is_some() {
            info!("Ignoring requested status; new accounts start as PENDING");
        }

        let password_hash = hash_password_blocking(request.password).await?;

        let user = User::new(
            Uuid::new_v4(),
            username.to_string(),
            email,
            phone,
            request.role.unwrap_or(Role::User),
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(UserEnvelope {
            user: UserResponse::from(user),
        })
    }

    /// Change status and/or role of an account (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        actor_role: Role,
        user_id: Uuid,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserEnvelope> {
        ensure_admin(actor_role)?;

        let mut user = self.get_user_entity(user_id).await?;

        if user.apply_changes(request.status, request.role) {
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user.id, status = %user.status, role = %user.role, "User updated");
        }

        Ok(UserEnvelope {
            user: UserResponse::from(user),
        })
    }
}
