//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination and ids.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AdminUser, AuthUser};
pub use pagination::{MessagePagination, MessagePaginationParams};
pub use path::IdPath;
pub use validated::ValidatedJson;
