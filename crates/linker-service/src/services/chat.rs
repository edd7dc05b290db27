//! Chat service
//!
//! Handles the shared chat feed: cursor-paginated reads and posting.

use chrono::{DateTime, Utc};
use linker_core::entities::{Authored, ChatMessage};
use linker_core::traits::MessageQuery;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{ChatMessageResponse, CreateMessageRequest, MessageEnvelope, MessagesPage};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::user::UserService;

/// Page size when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Largest page a client may request
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the newest messages created before `before`
    ///
    /// Messages come back oldest first. `has_more` is set when the page is
    /// full, so a client can keep paging with the first message's timestamp.
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        before: Option<DateTime<Utc>>,
        limit: Option<i64>,
    ) -> ServiceResult<MessagesPage> {
        let limit = page_size(limit)?;

        let mut messages = self
            .ctx
            .chat_message_repo()
            .list(MessageQuery { before, limit })
            .await?;

        let has_more = messages.len() as i64 == limit;
        messages.reverse();

        debug!(count = messages.len(), has_more, "Fetched chat page");

        Ok(MessagesPage {
            messages: messages.into_iter().map(ChatMessageResponse::from).collect(),
            has_more,
        })
    }

    /// Post a message as `user_id`
    #[instrument(skip(self, request))]
    pub async fn post_message(
        &self,
        user_id: Uuid,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageEnvelope> {
        let message = ChatMessage::new(Uuid::new_v4(), user_id, &request.content)?;

        let author = UserService::new(self.ctx).get_user_entity(user_id).await?;

        self.ctx.chat_message_repo().create(&message).await?;

        info!(message_id = %message.id, "Chat message posted");

        Ok(MessageEnvelope {
            message: Authored::new(message, author.summary()).into(),
        })
    }
}

fn page_size(limit: Option<i64>) -> ServiceResult<i64> {
    match limit {
        None => Ok(DEFAULT_PAGE_SIZE),
        Some(n) if (1..=MAX_PAGE_SIZE).contains(&n) => Ok(n),
        Some(_) => Err(ServiceError::validation(format!(
            "limit must be between 1 and {MAX_PAGE_SIZE}"
        ))),
    }
}
