//! Proxy link entity <- model mapper

use linker_core::entities::ProxyLink;

use super::parse_column;
use crate::models::ProxyLinkModel;

/// Convert ProxyLinkModel to ProxyLink entity
impl From<ProxyLinkModel> for ProxyLink {
    fn from(model: ProxyLinkModel) -> Self {
        ProxyLink {
            id: model.id,
            name: model.name,
            url: model.url,
            description: model.description,
            proxy_type: parse_column("proxy_links.proxy_type", &model.proxy_type),
            status: parse_column("proxy_links.status", &model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
