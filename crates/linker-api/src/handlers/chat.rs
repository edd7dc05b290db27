//! Chat handlers
//!
//! Endpoints for the shared chat feed.

use axum::{extract::State, Json};
use linker_service::dto::{CreateMessageRequest, MessageEnvelope, MessagesPage};
use linker_service::ChatService;

use crate::extractors::{AuthUser, MessagePagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get a page of messages, oldest first
///
/// GET /api/chat/messages?before=<rfc3339>&limit=<1-1000>
pub async fn list_messages(
    State(state): State<AppState>,
    _auth: AuthUser,
    pagination: MessagePagination,
) -> ApiResult<Json<MessagesPage>> {
    let service = ChatService::new(state.service_context());
    let response = service
        .list_messages(pagination.before, pagination.limit)
        .await?;
    Ok(Json(response))
}

/// Post a message
///
/// POST /api/chat/messages
pub async fn post_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageEnvelope>>> {
    let service = ChatService::new(state.service_context());
    let response = service.post_message(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}
