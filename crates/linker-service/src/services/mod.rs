//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod context;
pub mod error;
pub mod health;
pub mod issue;
pub mod proxy;
pub mod user;

// Re-export all services for convenience
pub use admin::AdminService;
pub use auth::AuthService;
pub use chat::ChatService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use issue::IssueService;
pub use proxy::ProxyService;
pub use user::UserService;

use std::sync::OnceLock;

use linker_common::auth::{hash_password, verify_password};
use linker_core::{DomainError, Role};

/// Reject callers without an administrative role
pub(crate) fn ensure_admin(role: Role) -> ServiceResult<()> {
    if role.is_admin() {
        Ok(())
    } else {
        Err(DomainError::AdminRequired.into())
    }
}

/// Treat empty or whitespace-only optional fields as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Hash a password on the blocking thread pool
pub(crate) async fn hash_password_blocking(password: String) -> ServiceResult<String> {
    let hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ServiceError::internal(format!("Password hashing task failed: {e}")))??;
    Ok(hash)
}

/// Check a password on the blocking thread pool
///
/// Without a stored hash the password is still checked against a throwaway
/// hash, so unknown usernames cost as much as wrong passwords.
pub(crate) async fn verify_password_blocking(
    password: String,
    hash: Option<String>,
) -> ServiceResult<bool> {
    tokio::task::spawn_blocking(move || match hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            let _ = verify_password(&password, placeholder_hash());
            false
        }
    })
    .await
    .map_err(|e| ServiceError::internal(format!("Password verification task failed: {e}")))
}

fn placeholder_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password("linker-placeholder-password").unwrap_or_default())
}
