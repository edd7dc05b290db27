//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod health;
pub mod issues;
pub mod proxies;
pub mod users;

use crate::response::ApiError;

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::EndpointNotFound
}
