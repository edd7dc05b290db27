//! In-memory repository implementations
//!
//! A single `MemoryStore` implements every repository trait so the API can be
//! exercised end to end without PostgreSQL. Ordering and uniqueness follow the
//! SQL repositories: newest first, `UNIQUE` on username/email/phone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use linker_common::JwtService;
use linker_core::entities::{
    Authored, ChatMessage, Issue, IssueStatus, ProxyLink, ProxyStatus, User, UserStatus,
};
use linker_core::error::DomainError;
use linker_core::traits::{
    ChatMessageRepository, HealthCheck, IssueRepository, MessageQuery, ProxyLinkRepository,
    RepoResult, UserRepository,
};
use linker_service::{ServiceContext, ServiceContextBuilder};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

/// Shared in-memory backing store
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<StoredUser>>,
    messages: RwLock<Vec<ChatMessage>>,
    issues: RwLock<Vec<Issue>>,
    proxies: RwLock<Vec<ProxyLink>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the readiness check fail, simulating a lost database
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Change an account's status directly, bypassing the API
    pub async fn set_user_status(&self, username: &str, status: UserStatus) -> RepoResult<()> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|s| s.user.username == username)
            .ok_or(DomainError::UserNotFound(Uuid::nil()))?;
        stored.user.status = status;
        Ok(())
    }

    /// Insert a user with a precomputed password hash
    pub async fn insert_user(&self, user: User, password_hash: String) {
        self.users.write().await.push(StoredUser {
            user,
            password_hash,
        });
    }

    async fn author_of(&self, user_id: Uuid) -> RepoResult<linker_core::UserSummary> {
        self.users
            .read()
            .await
            .iter()
            .find(|s| s.user.id == user_id)
            .map(|s| s.user.summary())
            .ok_or(DomainError::UserNotFound(user_id))
    }
}

/// Build a service context where every repository is backed by `store`
pub fn memory_context(store: &Arc<MemoryStore>, jwt_service: JwtService) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(store.clone())
        .chat_message_repo(store.clone())
        .issue_repo(store.clone())
        .proxy_link_repo(store.clone())
        .health_check(store.clone())
        .jwt_service(Arc::new(jwt_service))
        .build()
        .expect("all dependencies are provided")
}

fn newest_first<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> (chrono::DateTime<chrono::Utc>, Uuid),
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

// ============================================================================
// Users
// ============================================================================

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|s| s.user.id == id).map(|s| s.user.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|s| s.user.username == username)
            .map(|s| s.user.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let mut users: Vec<User> = self
            .users
            .read()
            .await
            .iter()
            .map(|s| s.user.clone())
            .collect();
        newest_first(&mut users, |u| (u.created_at, u.id));
        Ok(users)
    }

    async fn exists_any(
        &self,
        username: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> RepoResult<bool> {
        let users = self.users.read().await;
        Ok(users.iter().any(|s| {
            s.user.username == username
                || (email.is_some() && s.user.email.as_deref() == email)
                || (phone.is_some() && s.user.phone.as_deref() == phone)
        }))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.write().await;
        let duplicate = users.iter().any(|s| {
            s.user.username == user.username
                || (user.email.is_some() && s.user.email == user.email)
                || (user.phone.is_some() && s.user.phone == user.phone)
        });
        if duplicate {
            return Err(DomainError::UserAlreadyExists);
        }
        users.push(StoredUser {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.write().await;
        let stored = users
            .iter_mut()
            .find(|s| s.user.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        stored.user.role = user.role;
        stored.user.status = user.status;
        stored.user.updated_at = user.updated_at;
        Ok(())
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|s| s.user.id == id)
            .map(|s| s.password_hash.clone()))
    }

    async fn count(&self, status: Option<UserStatus>) -> RepoResult<i64> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|s| status.map_or(true, |st| s.user.status == st))
            .count() as i64)
    }
}

// ============================================================================
// Chat messages
// ============================================================================

#[async_trait]
impl ChatMessageRepository for MemoryStore {
    async fn list(&self, query: MessageQuery) -> RepoResult<Vec<Authored<ChatMessage>>> {
        let mut messages: Vec<ChatMessage> = self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| query.before.map_or(true, |before| m.created_at < before))
            .cloned()
            .collect();
        newest_first(&mut messages, |m| (m.created_at, m.id));
        messages.truncate(usize::try_from(query.limit).unwrap_or(0));

        let mut page = Vec::with_capacity(messages.len());
        for message in messages {
            let author = self.author_of(message.user_id).await?;
            page.push(Authored::new(message, author));
        }
        Ok(page)
    }

    async fn create(&self, message: &ChatMessage) -> RepoResult<()> {
        self.author_of(message.user_id).await?;
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.messages.read().await.len() as i64)
    }
}

// ============================================================================
// Issues
// ============================================================================

#[async_trait]
impl IssueRepository for MemoryStore {
    async fn list(&self) -> RepoResult<Vec<Authored<Issue>>> {
        let mut issues = self.issues.read().await.clone();
        newest_first(&mut issues, |i| (i.created_at, i.id));

        let mut result = Vec::with_capacity(issues.len());
        for issue in issues {
            let author = self.author_of(issue.user_id).await?;
            result.push(Authored::new(issue, author));
        }
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Authored<Issue>>> {
        let issue = self.issues.read().await.iter().find(|i| i.id == id).cloned();
        match issue {
            Some(issue) => {
                let author = self.author_of(issue.user_id).await?;
                Ok(Some(Authored::new(issue, author)))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, issue: &Issue) -> RepoResult<()> {
        self.author_of(issue.user_id).await?;
        self.issues.write().await.push(issue.clone());
        Ok(())
    }

    async fn update(&self, issue: &Issue) -> RepoResult<()> {
        let mut issues = self.issues.write().await;
        let stored = issues
            .iter_mut()
            .find(|i| i.id == issue.id)
            .ok_or(DomainError::IssueNotFound(issue.id))?;
        stored.status = issue.status;
        stored.priority = issue.priority;
        stored.updated_at = issue.updated_at;
        Ok(())
    }

    async fn count(&self, status: Option<IssueStatus>) -> RepoResult<i64> {
        let issues = self.issues.read().await;
        Ok(issues
            .iter()
            .filter(|i| status.map_or(true, |st| i.status == st))
            .count() as i64)
    }
}

// ============================================================================
// Proxy links
// ============================================================================

#[async_trait]
impl ProxyLinkRepository for MemoryStore {
    async fn list(&self, status: Option<ProxyStatus>) -> RepoResult<Vec<ProxyLink>> {
        let mut proxies: Vec<ProxyLink> = self
            .proxies
            .read()
            .await
            .iter()
            .filter(|p| status.map_or(true, |st| p.status == st))
            .cloned()
            .collect();
        newest_first(&mut proxies, |p| (p.created_at, p.id));
        Ok(proxies)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ProxyLink>> {
        Ok(self
            .proxies
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, proxy: &ProxyLink) -> RepoResult<()> {
        self.proxies.write().await.push(proxy.clone());
        Ok(())
    }

    async fn update(&self, proxy: &ProxyLink) -> RepoResult<()> {
        let mut proxies = self.proxies.write().await;
        let stored = proxies
            .iter_mut()
            .find(|p| p.id == proxy.id)
            .ok_or(DomainError::ProxyLinkNotFound(proxy.id))?;
        *stored = proxy.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut proxies = self.proxies.write().await;
        let before = proxies.len();
        proxies.retain(|p| p.id != id);
        if proxies.len() == before {
            return Err(DomainError::ProxyLinkNotFound(id));
        }
        Ok(())
    }

    async fn count(&self, status: Option<ProxyStatus>) -> RepoResult<i64> {
        let proxies = self.proxies.read().await;
        Ok(proxies
            .iter()
            .filter(|p| status.map_or(true, |st| p.status == st))
            .count() as i64)
    }
}

// ============================================================================
// Health
// ============================================================================

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }
}
