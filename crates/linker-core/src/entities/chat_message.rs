//! Chat message entity - an immutable line in the shared chat room

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum message length in characters, measured after trimming
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Chat message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message from raw user input
    ///
    /// # Errors
    /// Returns a validation error if the content is blank or too long
    pub fn new(id: Uuid, user_id: Uuid, raw_content: &str) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            user_id,
            content: Self::normalize_content(raw_content)?,
            created_at: Utc::now(),
        })
    }

    /// Trim the content and enforce the length bounds
    ///
    /// # Errors
    /// Returns `EmptyContent` or `ContentTooLong`
    pub fn normalize_content(raw: &str) -> Result<String, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyContent);
        }
        if trimmed.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_MESSAGE_LENGTH,
            });
        }
        Ok(trimmed.to_string())
    }
}
