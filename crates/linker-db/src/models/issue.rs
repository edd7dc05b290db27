//! Issue database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// An issues row joined with its reporter
#[derive(Debug, Clone, FromRow)]
pub struct IssueRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: String,
    pub author_role: String,
}
