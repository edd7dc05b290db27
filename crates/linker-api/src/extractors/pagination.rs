//! Pagination extractor
//!
//! Extracts the chat feed cursor (`before`, `limit`) from the query string.
//! Range checks on `limit` belong to the chat service.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct MessagePaginationParams {
    /// RFC 3339 timestamp; only older messages are returned
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

/// Parsed chat pagination parameters
#[derive(Debug, Clone, Default)]
pub struct MessagePagination {
    pub before: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
}

impl TryFrom<MessagePaginationParams> for MessagePagination {
    type Error = ApiError;

    fn try_from(params: MessagePaginationParams) -> Result<Self, Self::Error> {
        let before = params
            .before
            .filter(|s| !s.is_empty())
            .map(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|_| ApiError::invalid_query("Invalid 'before' timestamp"))
            })
            .transpose()?;

        let limit = params
            .limit
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.trim()
                    .parse::<i64>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'limit' value"))
            })
            .transpose()?;

        Ok(MessagePagination { before, limit })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MessagePagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<MessagePaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        MessagePagination::try_from(params)
    }
}
