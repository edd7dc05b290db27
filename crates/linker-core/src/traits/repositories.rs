//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL in `linker-db`, in-memory in tests).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    Authored, ChatMessage, Issue, IssueStatus, ProxyLink, ProxyStatus, User, UserStatus,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// List all users, newest first
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Check whether any user already holds the username, email or phone
    async fn exists_any(
        &self,
        username: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Persist role, status and timestamps of an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Count users, optionally restricted to one status
    async fn count(&self, status: Option<UserStatus>) -> RepoResult<i64>;
}

// ============================================================================
// Chat Message Repository
// ============================================================================

/// Cursor options for message queries
#[derive(Debug, Clone)]
pub struct MessageQuery {
    /// Only messages created strictly before this instant
    pub before: Option<DateTime<Utc>>,
    pub limit: i64,
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self {
            before: None,
            limit: 100,
        }
    }
}

#[async_trait]
pub trait ChatMessageRepository: Send + Sync {
    /// List messages newest first, joined with their authors
    async fn list(&self, query: MessageQuery) -> RepoResult<Vec<Authored<ChatMessage>>>;

    /// Create a new message
    async fn create(&self, message: &ChatMessage) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Issue Repository
// ============================================================================

#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// List all issues newest first, joined with their reporters
    async fn list(&self) -> RepoResult<Vec<Authored<Issue>>>;

    /// Find issue by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Authored<Issue>>>;

    /// Create a new issue
    async fn create(&self, issue: &Issue) -> RepoResult<()>;

    /// Persist status, priority and timestamps of an existing issue
    async fn update(&self, issue: &Issue) -> RepoResult<()>;

    /// Count issues, optionally restricted to one status
    async fn count(&self, status: Option<IssueStatus>) -> RepoResult<i64>;
}

// ============================================================================
// Proxy Link Repository
// ============================================================================

#[async_trait]
pub trait ProxyLinkRepository: Send + Sync {
    /// List proxy links newest first, optionally restricted to one status
    async fn list(&self, status: Option<ProxyStatus>) -> RepoResult<Vec<ProxyLink>>;

    /// Find proxy link by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ProxyLink>>;

    /// Create a new proxy link
    async fn create(&self, proxy: &ProxyLink) -> RepoResult<()>;

    /// Update an existing proxy link
    async fn update(&self, proxy: &ProxyLink) -> RepoResult<()>;

    /// Hard delete a proxy link
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Count proxy links, optionally restricted to one status
    async fn count(&self, status: Option<ProxyStatus>) -> RepoResult<i64>;
}

// ============================================================================
// Health
// ============================================================================

/// Readiness check for the backing store
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> RepoResult<()>;
}
