//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional .env file.

use chrono::Duration;
use resume_core::CapacityPolicy;
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub capacity: CapacityConfig,
    pub identity: IdentityConfig,
    pub billing: BillingConfig,
    pub genai: GenAiConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// User-capacity gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CapacityConfig {
    #[serde(default = "default_user_ceiling")]
    pub user_ceiling: i64,
    #[serde(default = "default_idle_threshold_hours")]
    pub idle_threshold_hours: i64,
}

impl CapacityConfig {
    /// Build the domain policy from this configuration
    #[must_use]
    pub fn policy(&self) -> CapacityPolicy {
        CapacityPolicy::new(self.user_ceiling, Duration::hours(self.idle_threshold_hours))
    }
}

/// Identity provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the provider's admin API
    #[serde(default = "default_identity_api_url")]
    pub api_url: String,
    /// Secret key for the admin API
    pub secret_key: String,
    /// Signing secret for inbound webhooks (whsec_...)
    pub webhook_secret: String,
}

/// Billing provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    #[serde(default = "default_billing_api_url")]
    pub api_url: String,
    pub secret_key: String,
    /// Signing secret for inbound webhooks
    pub webhook_secret: String,
    /// Where the customer portal sends users back to
    pub portal_return_url: String,
    /// Price id mapped to the pro tier
    pub pro_price_id: String,
    /// Price id mapped to the pro_plus tier
    pub pro_plus_price_id: String,
}

/// Generative-text provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GenAiConfig {
    #[serde(default = "default_genai_api_url")]
    pub api_url: String,
    pub api_key: String,
    #[serde(default = "default_genai_model")]
    pub model: String,
}

/// Session-token verification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub jwt_secret: String,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "resume-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_user_ceiling() -> i64 {
    20
}

fn default_idle_threshold_hours() -> i64 {
    6
}

fn default_identity_api_url() -> String {
    "https://api.clerk.com".to_string()
}

fn default_billing_api_url() -> String {
    "https://api.stripe.com".to_string()
}

fn default_genai_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_genai_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            capacity: CapacityConfig {
                user_ceiling: env::var("USER_CEILING")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_user_ceiling),
                idle_threshold_hours: env::var("IDLE_THRESHOLD_HOURS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_idle_threshold_hours),
            },
            identity: IdentityConfig {
                api_url: env::var("IDENTITY_API_URL").unwrap_or_else(|_| default_identity_api_url()),
                secret_key: env::var("IDENTITY_SECRET_KEY")
                    .map_err(|_| ConfigError::MissingVar("IDENTITY_SECRET_KEY"))?,
                webhook_secret: env::var("IDENTITY_WEBHOOK_SECRET")
                    .map_err(|_| ConfigError::MissingVar("IDENTITY_WEBHOOK_SECRET"))?,
            },
            billing: BillingConfig {
                api_url: env::var("BILLING_API_URL").unwrap_or_else(|_| default_billing_api_url()),
                secret_key: env::var("BILLING_SECRET_KEY")
                    .map_err(|_| ConfigError::MissingVar("BILLING_SECRET_KEY"))?,
                webhook_secret: env::var("BILLING_WEBHOOK_SECRET")
                    .map_err(|_| ConfigError::MissingVar("BILLING_WEBHOOK_SECRET"))?,
                portal_return_url: env::var("BILLING_PORTAL_RETURN_URL")
                    .map_err(|_| ConfigError::MissingVar("BILLING_PORTAL_RETURN_URL"))?,
                pro_price_id: env::var("BILLING_PRO_PRICE_ID")
                    .map_err(|_| ConfigError::MissingVar("BILLING_PRO_PRICE_ID"))?,
                pro_plus_price_id: env::var("BILLING_PRO_PLUS_PRICE_ID")
                    .map_err(|_| ConfigError::MissingVar("BILLING_PRO_PLUS_PRICE_ID"))?,
            },
            genai: GenAiConfig {
                api_url: env::var("GENAI_API_URL").unwrap_or_else(|_| default_genai_api_url()),
                api_key: env::var("GENAI_API_KEY")
                    .map_err(|_| ConfigError::MissingVar("GENAI_API_KEY"))?,
                model: env::var("GENAI_MODEL").unwrap_or_else(|_| default_genai_model()),
            },
            session: SessionConfig {
                jwt_secret: env::var("SESSION_JWT_SECRET")
                    .map_err(|_| ConfigError::MissingVar("SESSION_JWT_SECRET"))?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env::var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_requests_per_second),
                burst: env::var("RATE_LIMIT_BURST")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
