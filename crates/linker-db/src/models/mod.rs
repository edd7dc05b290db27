//! Database models - SQLx-compatible structs for PostgreSQL tables

mod chat_message;
mod issue;
mod proxy_link;
mod user;

pub use chat_message::ChatMessageRow;
pub use issue::IssueRow;
pub use proxy_link::ProxyLinkModel;
pub use user::UserModel;
