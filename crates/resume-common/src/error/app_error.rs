//! Application-wide error type
//!
//! Bridges domain errors and infrastructure failures into a single type that
//! upper layers can map onto HTTP responses.

use resume_core::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error type covering auth, validation, and infrastructure failures
#[derive(Debug, Error)]
pub enum AppError {
    // Authentication / authorization
    #[error("Invalid session token")]
    InvalidToken,

    #[error("Session token expired")]
    TokenExpired,

    #[error("Missing authentication credentials")]
    MissingAuth,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    // Webhooks
    #[error("Invalid webhook signature")]
    InvalidWebhookSignature,

    #[error("Webhook payload malformed: {0}")]
    MalformedWebhookPayload(String),

    // Validation
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resources
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    // Infrastructure
    #[error("Database error: {0}")]
    Database(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Domain
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status code this error maps to
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidToken | Self::TokenExpired | Self::MissingAuth
            | Self::InvalidWebhookSignature => 401,
            Self::InsufficientPermissions => 403,
            Self::NotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::Validation(_) | Self::InvalidInput(_) | Self::MalformedWebhookPayload(_) => 400,
            Self::RateLimitExceeded => 429,
            Self::Domain(e) => domain_status_code(e),
            Self::Database(_) | Self::ExternalService(_) | Self::Config(_) | Self::Internal(_) => {
                500
            }
        }
    }

    /// Stable machine-readable error code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
            Self::InvalidWebhookSignature => "INVALID_WEBHOOK_SIGNATURE",
            Self::MalformedWebhookPayload(_) => "MALFORMED_WEBHOOK_PAYLOAD",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

fn domain_status_code(error: &DomainError) -> u16 {
    if error.is_not_found() {
        404
    } else if error.is_validation() {
        400
    } else if error.is_authorization() {
        403
    } else if error.is_conflict() {
        409
    } else {
        500
    }
}

/// JSON error body returned to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        // Never leak internal detail for server errors
        let message = if error.is_server_error() {
            "Internal server error".to_string()
        } else {
            error.to_string()
        };
        Self {
            error: message,
            code: error.error_code().to_string(),
            details: None,
        }
    }
}

/// Convenience result alias
pub type AppResult<T> = Result<T, AppError>;
