//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in linker-core.
//! Each repository handles database operations for a specific domain entity.

mod chat_message;
mod error;
mod health;
mod issue;
mod proxy_link;
mod user;

pub use chat_message::PgChatMessageRepository;
pub use health::PgHealthCheck;
pub use issue::PgIssueRepository;
pub use proxy_link::PgProxyLinkRepository;
pub use user::PgUserRepository;
