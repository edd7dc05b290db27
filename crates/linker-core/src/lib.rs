//! # linker-core
//!
//! Domain layer containing entities, closed enumerations, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Authored, ChatMessage, Issue, IssuePriority, IssueStatus, ProxyChanges, ProxyLink, ProxyStatus,
    ProxyType, Role, User, UserStatus, UserSummary, MAX_MESSAGE_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    ChatMessageRepository, HealthCheck, IssueRepository, MessageQuery, ProxyLinkRepository,
    RepoResult, UserRepository,
};
