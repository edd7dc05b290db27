//! PostgreSQL implementation of ProxyLinkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use linker_core::entities::{ProxyLink, ProxyStatus};
use linker_core::error::DomainError;
use linker_core::traits::{ProxyLinkRepository, RepoResult};

use crate::models::ProxyLinkModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ProxyLinkRepository
#[derive(Clone)]
pub struct PgProxyLinkRepository {
    pool: PgPool,
}

impl PgProxyLinkRepository {
    /// Create a new PgProxyLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProxyLinkRepository for PgProxyLinkRepository {
    #[instrument(skip(self))]
    async fn list(&self, status: Option<ProxyStatus>) -> RepoResult<Vec<ProxyLink>> {
        let rows = sqlx::query_as::<_, ProxyLinkModel>(
            r"
            SELECT id, name, url, description, proxy_type, status, created_at, updated_at
            FROM proxy_links
            WHERE ($1::TEXT IS NULL OR status = $1)
            ORDER BY created_at DESC
            ",
        )
        .bind(status.map(ProxyStatus::as_str))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ProxyLink::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ProxyLink>> {
        let result = sqlx::query_as::<_, ProxyLinkModel>(
            r"
            SELECT id, name, url, description, proxy_type, status, created_at, updated_at
            FROM proxy_links
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ProxyLink::from))
    }

    #[instrument(skip(self, proxy), fields(proxy_id = %proxy.id))]
    async fn create(&self, proxy: &ProxyLink) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO proxy_links (id, name, url, description, proxy_type, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(proxy.id)
        .bind(&proxy.name)
        .bind(&proxy.url)
        .bind(&proxy.description)
        .bind(proxy.proxy_type.as_str())
        .bind(proxy.status.as_str())
        .bind(proxy.created_at)
        .bind(proxy.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, proxy), fields(proxy_id = %proxy.id))]
    async fn update(&self, proxy: &ProxyLink) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE proxy_links
            SET name = $2, url = $3, description = $4, proxy_type = $5, status = $6,
                updated_at = $7
            WHERE id = $1
            ",
        )
        .bind(proxy.id)
        .bind(&proxy.name)
        .bind(&proxy.url)
        .bind(&proxy.description)
        .bind(proxy.proxy_type.as_str())
        .bind(proxy.status.as_str())
        .bind(proxy.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProxyLinkNotFound(proxy.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM proxy_links WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProxyLinkNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self, status: Option<ProxyStatus>) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM proxy_links WHERE ($1::TEXT IS NULL OR status = $1)
            ",
        )
        .bind(status.map(ProxyStatus::as_str))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
