//! Proxy service
//!
//! Handles the proxy link catalogue. Everyone signed in can read the active
//! entries; admins see everything and are the only ones who may change it.

use linker_core::entities::{ProxyChanges, ProxyLink, ProxyStatus, Role};
use linker_core::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::ValidateUrl;

use crate::dto::{
    CreateProxyRequest, ProxiesResponse, ProxyEnvelope, ProxyResponse, SuccessResponse,
    UpdateProxyRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::{ensure_admin, non_blank};

/// Proxy service
pub struct ProxyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProxyService<'a> {
    /// Create a new ProxyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List proxies visible to `role`, newest first
    #[instrument(skip(self))]
    pub async fn list_proxies(&self, role: Role) -> ServiceResult<ProxiesResponse> {
        let filter = if role.is_admin() {
            None
        } else {
            Some(ProxyStatus::Active)
        };

        let proxies = self.ctx.proxy_link_repo().list(filter).await?;

        Ok(ProxiesResponse {
            proxies: proxies.iter().map(ProxyResponse::from).collect(),
        })
    }

    /// Get proxy by ID; hidden entries look missing to non-admins
    #[instrument(skip(self))]
    pub async fn get_proxy(&self, role: Role, proxy_id: Uuid) -> ServiceResult<ProxyEnvelope> {
        let proxy = self.find_proxy(proxy_id).await?;

        if !role.is_admin() && !proxy.is_public() {
            return Err(DomainError::ProxyLinkNotFound(proxy_id).into());
        }

        Ok(ProxyEnvelope {
            proxy: proxy.into(),
        })
    }

    /// Register a proxy (admin only)
    #[instrument(skip(self, request))]
    pub async fn create_proxy(
        &self,
        role: Role,
        request: CreateProxyRequest,
    ) -> ServiceResult<ProxyEnvelope> {
        ensure_admin(role)?;

        let name = request.name.trim();
        let url = request.url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(ServiceError::validation("Name and URL are required"));
        }
        ensure_valid_url(url)?;

        let proxy = ProxyLink::new(
            Uuid::new_v4(),
            name.to_string(),
            url.to_string(),
            non_blank(request.description),
            request.proxy_type.unwrap_or_default(),
        );

        self.ctx.proxy_link_repo().create(&proxy).await?;

        info!(proxy_id = %proxy.id, proxy_type = %proxy.proxy_type, "Proxy created");

        Ok(ProxyEnvelope {
            proxy: proxy.into(),
        })
    }

    /// Partially update a proxy (admin only)
    #[instrument(skip(self, request))]
    pub async fn update_proxy(
        &self,
        role: Role,
        proxy_id: Uuid,
        request: UpdateProxyRequest,
    ) -> ServiceResult<ProxyEnvelope> {
        ensure_admin(role)?;

        let name = match request.name.as_deref().map(str::trim) {
            Some("") => return Err(ServiceError::validation("Name cannot be empty")),
            other => other.map(str::to_string),
        };
        let url = match request.url.as_deref().map(str::trim) {
            Some("") => return Err(ServiceError::validation("URL cannot be empty")),
            Some(url) => {
                ensure_valid_url(url)?;
                Some(url.to_string())
            }
            None => None,
        };

        let mut proxy = self.find_proxy(proxy_id).await?;

        let changes = ProxyChanges {
            name,
            url,
            description: request.description.map(non_blank),
            proxy_type: request.proxy_type,
            status: request.status,
        };

        if proxy.apply_changes(changes) {
            self.ctx.proxy_link_repo().update(&proxy).await?;
            info!(proxy_id = %proxy_id, status = %proxy.status, "Proxy updated");
        }

        Ok(ProxyEnvelope {
            proxy: proxy.into(),
        })
    }

    /// Delete a proxy (admin only)
    #[instrument(skip(self))]
    pub async fn delete_proxy(&self, role: Role, proxy_id: Uuid) -> ServiceResult<SuccessResponse> {
        ensure_admin(role)?;

        // Existence is checked up front so a missing id is a 404 rather than a store error
        self.find_proxy(proxy_id).await?;

        self.ctx.proxy_link_repo().delete(proxy_id).await?;

        info!(proxy_id = %proxy_id, "Proxy deleted");

        Ok(SuccessResponse::ok())
    }

    async fn find_proxy(&self, proxy_id: Uuid) -> ServiceResult<ProxyLink> {
        self.ctx
            .proxy_link_repo()
            .find_by_id(proxy_id)
            .await?
            .ok_or_else(|| DomainError::ProxyLinkNotFound(proxy_id).into())
    }
}

fn ensure_valid_url(url: &str) -> ServiceResult<()> {
    if url.validate_url() {
        Ok(())
    } else {
        Err(ServiceError::validation("Invalid URL"))
    }
}
