//! # resume-common
//!
//! Shared utilities including configuration, error handling, session-token
//! verification, webhook signature verification, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod webhook;

// Re-export commonly used types at crate root
pub use auth::{SessionClaims, SessionVerifier};
pub use config::{
    AppConfig, AppSettings, BillingConfig, CapacityConfig, ConfigError, CorsConfig,
    DatabaseConfig, Environment, GenAiConfig, IdentityConfig, RateLimitConfig, ServerConfig,
    SessionConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
pub use webhook::{BillingWebhookVerifier, WebhookError, WebhookVerifier};
