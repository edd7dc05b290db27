//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use linker_core::entities::{Authored, ChatMessage, Issue, ProxyLink, User, UserSummary};

use super::responses::{
    AuthorResponse, ChatMessageResponse, IssueResponse, ProxyResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role,
            status: user.status,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<UserSummary> for AuthorResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id,
            username: summary.username,
            role: summary.role,
        }
    }
}

// ============================================================================
// Chat Mappers
// ============================================================================

impl From<Authored<ChatMessage>> for ChatMessageResponse {
    fn from(authored: Authored<ChatMessage>) -> Self {
        let Authored { item, author } = authored;
        Self {
            id: item.id,
            content: item.content,
            user_id: item.user_id,
            created_at: item.created_at,
            user: author.into(),
        }
    }
}

// ============================================================================
// Issue Mappers
// ============================================================================

impl From<Authored<Issue>> for IssueResponse {
    fn from(authored: Authored<Issue>) -> Self {
        let Authored { item, author } = authored;
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            priority: item.priority,
            status: item.status,
            user_id: item.user_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
            user: author.into(),
        }
    }
}

// ============================================================================
// Proxy Mappers
// ============================================================================

impl From<&ProxyLink> for ProxyResponse {
    fn from(proxy: &ProxyLink) -> Self {
        Self {
            id: proxy.id,
            name: proxy.name.clone(),
            url: proxy.url.clone(),
            description: proxy.description.clone(),
            proxy_type: proxy.proxy_type,
            status: proxy.status,
            created_at: proxy.created_at,
            updated_at: proxy.updated_at,
        }
    }
}

impl From<ProxyLink> for ProxyResponse {
    fn from(proxy: ProxyLink) -> Self {
        Self::from(&proxy)
    }
}
