//! Service context - dependency container for services
//!
//! Holds all repositories and the token service needed by services.

use std::sync::Arc;

use linker_common::auth::JwtService;
use linker_core::traits::{
    ChatMessageRepository, HealthCheck, IssueRepository, ProxyLinkRepository, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are trait objects so the same services run against
/// PostgreSQL in production and in-memory stores in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    chat_message_repo: Arc<dyn ChatMessageRepository>,
    issue_repo: Arc<dyn IssueRepository>,
    proxy_link_repo: Arc<dyn ProxyLinkRepository>,
    health_check: Arc<dyn HealthCheck>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        chat_message_repo: Arc<dyn ChatMessageRepository>,
        issue_repo: Arc<dyn IssueRepository>,
        proxy_link_repo: Arc<dyn ProxyLinkRepository>,
        health_check: Arc<dyn HealthCheck>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_repo,
            chat_message_repo,
            issue_repo,
            proxy_link_repo,
            health_check,
            jwt_service,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the chat message repository
    pub fn chat_message_repo(&self) -> &dyn ChatMessageRepository {
        self.chat_message_repo.as_ref()
    }

    /// Get the issue repository
    pub fn issue_repo(&self) -> &dyn IssueRepository {
        self.issue_repo.as_ref()
    }

    /// Get the proxy link repository
    pub fn proxy_link_repo(&self) -> &dyn ProxyLinkRepository {
        self.proxy_link_repo.as_ref()
    }

    pub fn health_check(&self) -> &dyn HealthCheck {
        self.health_check.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    chat_message_repo: Option<Arc<dyn ChatMessageRepository>>,
    issue_repo: Option<Arc<dyn IssueRepository>>,
    proxy_link_repo: Option<Arc<dyn ProxyLinkRepository>>,
    health_check: Option<Arc<dyn HealthCheck>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn chat_message_repo(mut self, repo: Arc<dyn ChatMessageRepository>) -> Self {
        self.chat_message_repo = Some(repo);
        self
    }

    pub fn issue_repo(mut self, repo: Arc<dyn IssueRepository>) -> Self {
        self.issue_repo = Some(repo);
        self
    }

    pub fn proxy_link_repo(mut self, repo: Arc<dyn ProxyLinkRepository>) -> Self {
        self.proxy_link_repo = Some(repo);
        self
    }

    pub fn health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_check = Some(check);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::internal(format!("{name} is required")))
        }

        Ok(ServiceContext::new(
            required(self.user_repo, "user_repo")?,
            required(self.chat_message_repo, "chat_message_repo")?,
            required(self.issue_repo, "issue_repo")?,
            required(self.proxy_link_repo, "proxy_link_repo")?,
            required(self.health_check, "health_check")?,
            required(self.jwt_service, "jwt_service")?,
        ))
    }
}
