//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Resume not found: {0}")]
    ResumeNotFound(Uuid),

    #[error("No subscription on record")]
    SubscriptionNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No primary email address in payload")]
    MissingEmail,

    #[error("No name in payload")]
    MissingName,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Resume belongs to another user")]
    NotResumeOwner,

    #[error("Upgrade your subscription to use this feature")]
    UpgradeRequired,

    #[error("Resume limit reached for the current plan: max {max}")]
    ResumeLimitReached { max: usize },

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("User limit reached ({ceiling}) and no inactive account to evict")]
    UserCapacityExhausted { ceiling: i64 },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ResumeNotFound(_) => "UNKNOWN_RESUME",
            Self::SubscriptionNotFound => "UNKNOWN_SUBSCRIPTION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::MissingName => "MISSING_NAME",

            // Authorization
            Self::NotResumeOwner => "NOT_RESUME_OWNER",
            Self::UpgradeRequired => "UPGRADE_REQUIRED",
            Self::ResumeLimitReached { .. } => "RESUME_LIMIT_REACHED",

            // Business Rules
            Self::UserCapacityExhausted { .. } => "USER_CAPACITY_EXHAUSTED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::ExternalServiceError(_) => "EXTERNAL_SERVICE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::ResumeNotFound(_) | Self::SubscriptionNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::MissingEmail | Self::MissingName
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotResumeOwner | Self::UpgradeRequired | Self::ResumeLimitReached { .. }
        )
    }

    /// Check if this is a business-rule conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UserCapacityExhausted { .. })
    }

    /// Check if this is a transient external-service failure
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalServiceError(_))
    }
}
