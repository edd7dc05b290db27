//! PostgreSQL implementation of ChatMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use linker_core::entities::{Authored, ChatMessage};
use linker_core::traits::{ChatMessageRepository, MessageQuery, RepoResult};

use crate::models::ChatMessageRow;

use super::error::map_db_error;

/// PostgreSQL implementation of ChatMessageRepository
#[derive(Clone)]
pub struct PgChatMessageRepository {
    pool: PgPool,
}

impl PgChatMessageRepository {
    /// Create a new PgChatMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatMessageRepository for PgChatMessageRepository {
    #[instrument(skip(self))]
    async fn list(&self, query: MessageQuery) -> RepoResult<Vec<Authored<ChatMessage>>> {
        let rows = match query.before {
            Some(before) => {
                sqlx::query_as::<_, ChatMessageRow>(
                    r"
                    SELECT m.id, m.user_id, m.content, m.created_at,
                           u.username AS author_username, u.role AS author_role
                    FROM chat_messages m
                    JOIN users u ON u.id = m.user_id
                    WHERE m.created_at < $1
                    ORDER BY m.created_at DESC, m.id DESC
                    LIMIT $2
                    ",
                )
                .bind(before)
                .bind(query.limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ChatMessageRow>(
                    r"
                    SELECT m.id, m.user_id, m.content, m.created_at,
                           u.username AS author_username, u.role AS author_role
                    FROM chat_messages m
                    JOIN users u ON u.id = m.user_id
                    ORDER BY m.created_at DESC, m.id DESC
                    LIMIT $1
                    ",
                )
                .bind(query.limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Authored::from).collect())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &ChatMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO chat_messages (id, user_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(message.id)
        .bind(message.user_id)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM chat_messages")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
