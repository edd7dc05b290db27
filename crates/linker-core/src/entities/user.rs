//! User entity - represents an account that may sign in to the API

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Permission tier of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Get the canonical string form (as stored and serialized)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Check if this role may perform administrative operations
    #[inline]
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            "SUPER_ADMIN" => Ok(Self::SuperAdmin),
            other => Err(DomainError::invalid_enum("role", other)),
        }
    }
}

/// Account lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Suspended,
}

impl UserStatus {
    /// Get the canonical string form (as stored and serialized)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Suspended => "SUSPENDED",
        }
    }

    /// Only approved accounts may sign in
    ///
    /// # Errors
    /// Returns the authorization error matching the account state otherwise
    pub fn ensure_can_authenticate(self) -> Result<(), DomainError> {
        match self {
            Self::Approved => Ok(()),
            Self::Pending => Err(DomainError::AccountNotApproved),
            Self::Rejected => Err(DomainError::AccountRejected),
            Self::Suspended => Err(DomainError::AccountSuspended),
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "SUSPENDED" => Ok(Self::Suspended),
            other => Err(DomainError::invalid_enum("user status", other)),
        }
    }
}

/// User entity. The password hash lives only in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user awaiting approval
    pub fn new(
        id: Uuid,
        username: String,
        email: Option<String>,
        phone: Option<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            phone,
            role,
            status: UserStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Apply an administrative status/role change; returns whether anything changed
    pub fn apply_changes(&mut self, status: Option<UserStatus>, role: Option<Role>) -> bool {
        let mut changed = false;

        if let Some(status) = status {
            if status != self.status {
                self.status = status;
                changed = true;
            }
        }

        if let Some(role) = role {
            if role != self.role {
                self.role = role;
                changed = true;
            }
        }

        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }

    /// Summary embedded in messages and issues
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// Minimal view of a user attached to content they own
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
}
