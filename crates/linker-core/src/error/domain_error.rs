//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
///
/// Display strings are the messages clients see, so they stay short and stable.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound(Uuid),

    #[error("Issue not found")]
    IssueNotFound(Uuid),

    #[error("Proxy not found")]
    ProxyLinkNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Message content is required")]
    EmptyContent,

    #[error("Message too long (max {max} characters)")]
    ContentTooLong { max: usize },

    #[error("Invalid {kind}: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Admin access required")]
    AdminRequired,

    #[error("Account not approved yet")]
    AccountNotApproved,

    #[error("Account has been rejected")]
    AccountRejected,

    #[error("Account has been suspended")]
    AccountSuspended,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists")]
    UserAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Build the error returned when a stored or submitted enum value is unknown
    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::IssueNotFound(_) => "UNKNOWN_ISSUE",
            Self::ProxyLinkNotFound(_) => "UNKNOWN_PROXY",

            // Validation
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidEnumValue { .. } => "INVALID_VALUE",

            // Authorization
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::AccountNotApproved => "ACCOUNT_NOT_APPROVED",
            Self::AccountRejected => "ACCOUNT_REJECTED",
            Self::AccountSuspended => "ACCOUNT_SUSPENDED",

            // Conflict
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::IssueNotFound(_)
                | Self::ProxyLinkNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyContent
                | Self::ContentTooLong { .. }
                | Self::InvalidEnumValue { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AdminRequired
                | Self::AccountNotApproved
                | Self::AccountRejected
                | Self::AccountSuspended
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UserAlreadyExists)
    }
}
