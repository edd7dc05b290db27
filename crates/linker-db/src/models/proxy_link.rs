//! Proxy link database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for proxy_links table
#[derive(Debug, Clone, FromRow)]
pub struct ProxyLinkModel {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub proxy_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
