//! Chat message entity <- row mapper

use linker_core::entities::{Authored, ChatMessage, UserSummary};

use super::parse_column;
use crate::models::ChatMessageRow;

impl From<ChatMessageRow> for Authored<ChatMessage> {
    fn from(row: ChatMessageRow) -> Self {
        let author = UserSummary {
            id: row.user_id,
            username: row.author_username,
            role: parse_column("users.role", &row.author_role),
        };
        Authored::new(
            ChatMessage {
                id: row.id,
                user_id: row.user_id,
                content: row.content,
                created_at: row.created_at,
            },
            author,
        )
    }
}
