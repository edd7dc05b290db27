//! Domain entities - core business objects

mod chat_message;
mod issue;
mod proxy_link;
mod user;

pub use chat_message::{ChatMessage, MAX_MESSAGE_LENGTH};
pub use issue::{Issue, IssuePriority, IssueStatus};
pub use proxy_link::{ProxyChanges, ProxyLink, ProxyStatus, ProxyType};
pub use user::{Role, User, UserStatus, UserSummary};

/// An entity joined with a summary of the user who owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authored<T> {
    pub item: T,
    pub author: UserSummary,
}

impl<T> Authored<T> {
    pub fn new(item: T, author: UserSummary) -> Self {
        Self { item, author }
    }
}
