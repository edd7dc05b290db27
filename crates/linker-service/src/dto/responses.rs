//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase keys.
//! Password hashes never appear here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use linker_core::entities::{
    IssuePriority, IssueStatus, ProxyStatus, ProxyType, Role, UserStatus,
};

// ============================================================================
// Common Response Types
// ============================================================================

/// Acknowledgement for operations without a resource body
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Full account view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author summary embedded in messages and issues
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

impl LoginResponse {
    pub fn new(token: String, user: UserResponse) -> Self {
        Self {
            message: "Login successful".to_string(),
            token,
            user,
        }
    }
}

// ============================================================================
// Chat Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub user: AuthorResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: ChatMessageResponse,
}

/// One page of the chat feed, oldest message first
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesPage {
    pub messages: Vec<ChatMessageResponse>,
    pub has_more: bool,
}

// ============================================================================
// Issue Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: IssuePriority,
    pub status: IssueStatus,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: AuthorResponse,
}

#[derive(Debug, Serialize)]
pub struct IssueEnvelope {
    pub issue: IssueResponse,
}

#[derive(Debug, Serialize)]
pub struct IssuesResponse {
    pub issues: Vec<IssueResponse>,
}

// ============================================================================
// Proxy Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub proxy_type: ProxyType,
    pub status: ProxyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ProxyEnvelope {
    pub proxy: ProxyResponse,
}

#[derive(Debug, Serialize)]
pub struct ProxiesResponse {
    pub proxies: Vec<ProxyResponse>,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Aggregate counts across all entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsResponse {
    pub users: UserStats,
    pub messages: MessageStats,
    pub issues: IssueStats,
    pub proxies: ProxyStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueStats {
    pub total: i64,
    pub open: i64,
    pub resolved: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyStats {
    pub total: i64,
    pub active: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    /// Seconds since the process started serving
    pub uptime: f64,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
