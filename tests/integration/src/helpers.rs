//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and asserting on responses.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use resume_api::{create_app, create_app_state};
use resume_common::config::{
    AppConfig, AppSettings, BillingConfig, CapacityConfig, CorsConfig, DatabaseConfig,
    Environment, GenAiConfig, IdentityConfig, RateLimitConfig, ServerConfig, SessionConfig,
};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{TEST_BILLING_WEBHOOK_SECRET, TEST_IDENTITY_WEBHOOK_SECRET, TEST_JWT_SECRET};

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .put(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with a raw body and explicit headers
    ///
    /// Webhook deliveries are signed over the exact bytes of the body, so
    /// they are sent raw instead of through the JSON serializer.
    pub async fn post_raw(
        &self,
        path: &str,
        headers: &[(String, String)],
        body: String,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");
        for (name, value) in headers {
            request = request.header(name, value);
        }
        Ok(request.body(body).send().await?)
    }
}

/// Create a test configuration
///
/// Only `DATABASE_URL` is read from the environment. Everything else is
/// pinned to fixed test values so signed fixtures line up with the server's
/// verifiers, and provider URLs point at unroutable addresses so any
/// unexpected outbound call fails fast.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set for integration tests"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "resume-server-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        capacity: CapacityConfig {
            // High enough that repeated runs against a shared database
            // never hit the admission gate
            user_ceiling: 10_000,
            idle_threshold_hours: 6,
        },
        identity: IdentityConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            secret_key: "sk_test_identity".to_string(),
            webhook_secret: TEST_IDENTITY_WEBHOOK_SECRET.to_string(),
        },
        billing: BillingConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            secret_key: "sk_test_billing".to_string(),
            webhook_secret: TEST_BILLING_WEBHOOK_SECRET.to_string(),
            portal_return_url: "http://localhost:3000/billing".to_string(),
            pro_price_id: "price_pro".to_string(),
            pro_plus_price_id: "price_pro_plus".to_string(),
        },
        genai: GenAiConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            api_key: "test-genai-key".to_string(),
            model: "gemini-2.0-flash".to_string(),
        },
        session: SessionConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 100,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
