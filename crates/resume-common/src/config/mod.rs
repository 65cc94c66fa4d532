//! Configuration loading

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BillingConfig, CapacityConfig, ConfigError, CorsConfig,
    DatabaseConfig, Environment, GenAiConfig, IdentityConfig, RateLimitConfig, ServerConfig,
    SessionConfig,
};
