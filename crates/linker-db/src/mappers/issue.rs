//! Issue entity <- row mapper

use linker_core::entities::{Authored, Issue, UserSummary};

use super::parse_column;
use crate::models::IssueRow;

impl From<IssueRow> for Authored<Issue> {
    fn from(row: IssueRow) -> Self {
        let author = UserSummary {
            id: row.user_id,
            username: row.author_username,
            role: parse_column("users.role", &row.author_role),
        };
        Authored::new(
            Issue {
                id: row.id,
                user_id: row.user_id,
                title: row.title,
                description: row.description,
                priority: parse_column("issues.priority", &row.priority),
                status: parse_column("issues.status", &row.status),
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            author,
        )
    }
}
