//! PostgreSQL implementation of IssueRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use linker_core::entities::{Authored, Issue, IssueStatus};
use linker_core::error::DomainError;
use linker_core::traits::{IssueRepository, RepoResult};

use crate::models::IssueRow;

use super::error::map_db_error;

/// PostgreSQL implementation of IssueRepository
#[derive(Clone)]
pub struct PgIssueRepository {
    pool: PgPool,
}

impl PgIssueRepository {
    /// Create a new PgIssueRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssueRepository for PgIssueRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Authored<Issue>>> {
        let rows = sqlx::query_as::<_, IssueRow>(
            r"
            SELECT i.id, i.user_id, i.title, i.description, i.priority, i.status,
                   i.created_at, i.updated_at,
                   u.username AS author_username, u.role AS author_role
            FROM issues i
            JOIN users u ON u.id = i.user_id
            ORDER BY i.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Authored::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Authored<Issue>>> {
        let result = sqlx::query_as::<_, IssueRow>(
            r"
            SELECT i.id, i.user_id, i.title, i.description, i.priority, i.status,
                   i.created_at, i.updated_at,
                   u.username AS author_username, u.role AS author_role
            FROM issues i
            JOIN users u ON u.id = i.user_id
            WHERE i.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Authored::from))
    }

    #[instrument(skip(self, issue), fields(issue_id = %issue.id))]
    async fn create(&self, issue: &Issue) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO issues (id, user_id, title, description, priority, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(issue.id)
        .bind(issue.user_id)
        .bind(&issue.title)
        .bind(&issue.description)
        .bind(issue.priority.as_str())
        .bind(issue.status.as_str())
        .bind(issue.created_at)
        .bind(issue.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, issue), fields(issue_id = %issue.id))]
    async fn update(&self, issue: &Issue) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE issues
            SET priority = $2, status = $3, updated_at = $4
            WHERE id = $1
            ",
        )
        .bind(issue.id)
        .bind(issue.priority.as_str())
        .bind(issue.status.as_str())
        .bind(issue.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::IssueNotFound(issue.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self, status: Option<IssueStatus>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM issues WHERE ($1::TEXT IS NULL OR status = $1)
            ",
        )
        .bind(status.map(IssueStatus::as_str))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
