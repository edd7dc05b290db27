//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Required text fields default to empty so the services can answer with
//! their own "... are required" messages instead of a generic parse error.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use linker_core::entities::{IssuePriority, IssueStatus, ProxyStatus, ProxyType, Role, UserStatus};

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`)
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Account creation request (open registration)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(max = 50, message = "Username must be at most 50 characters"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: String,

    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,

    pub role: Option<Role>,

    /// Accepted for compatibility; new accounts always start as PENDING
    pub status: Option<UserStatus>,
}

/// Administrative update of another account
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub status: Option<UserStatus>,
    pub role: Option<Role>,
}

// ============================================================================
// Chat Requests
// ============================================================================

/// Post a chat message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub content: String,
}

// ============================================================================
// Issue Requests
// ============================================================================

/// Report an issue
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIssueRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: String,

    pub priority: Option<IssuePriority>,
}

/// Partial issue update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateIssueRequest {
    pub status: Option<IssueStatus>,
    pub priority: Option<IssuePriority>,
}

// ============================================================================
// Proxy Requests
// ============================================================================

/// Register a proxy link
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProxyRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "URL must be at most 2048 characters"))]
    pub url: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub proxy_type: Option<ProxyType>,
}

/// Partial proxy update
///
/// `description: null` clears the description, while omitting it keeps the
/// stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProxyRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(url(message = "Invalid URL"))]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(rename = "type")]
    pub proxy_type: Option<ProxyType>,

    pub status: Option<ProxyStatus>,
}
