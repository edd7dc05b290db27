//! Proxy link entity - a curated entry in the shared proxy catalogue

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Who operates the proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProxyType {
    Official,
    #[default]
    ThirdParty,
    Community,
}

impl ProxyType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Official => "OFFICIAL",
            Self::ThirdParty => "THIRD_PARTY",
            Self::Community => "COMMUNITY",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProxyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFFICIAL" => Ok(Self::Official),
            "THIRD_PARTY" => Ok(Self::ThirdParty),
            "COMMUNITY" => Ok(Self::Community),
            other => Err(DomainError::invalid_enum("proxy type", other)),
        }
    }
}

/// Availability of a proxy link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProxyStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

impl ProxyStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl fmt::Display for ProxyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProxyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "MAINTENANCE" => Ok(Self::Maintenance),
            other => Err(DomainError::invalid_enum("proxy status", other)),
        }
    }
}

/// Proxy link entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyLink {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub proxy_type: ProxyType,
    pub status: ProxyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProxyLink {
    /// Create a new active proxy link
    pub fn new(
        id: Uuid,
        name: String,
        url: String,
        description: Option<String>,
        proxy_type: ProxyType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            url,
            description,
            proxy_type,
            status: ProxyStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether non-admin users may see this link
    #[inline]
    pub fn is_public(&self) -> bool {
        self.status == ProxyStatus::Active
    }

    /// Apply a partial update; returns whether anything changed
    pub fn apply_changes(&mut self, changes: ProxyChanges) -> bool {
        let mut changed = false;

        if let Some(name) = changes.name {
            if name != self.name {
                self.name = name;
                changed = true;
            }
        }

        if let Some(url) = changes.url {
            if url != self.url {
                self.url = url;
                changed = true;
            }
        }

        if let Some(description) = changes.description {
            if description != self.description {
                self.description = description;
                changed = true;
            }
        }

        if let Some(proxy_type) = changes.proxy_type {
            if proxy_type != self.proxy_type {
                self.proxy_type = proxy_type;
                changed = true;
            }
        }

        if let Some(status) = changes.status {
            if status != self.status {
                self.status = status;
                changed = true;
            }
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}

/// Partial update of a proxy link
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyChanges {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<Option<String>>,
    pub proxy_type: Option<ProxyType>,
    pub status: Option<ProxyStatus>,
}
