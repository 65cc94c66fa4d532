//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use resume_clients::{HttpBillingProvider, HttpIdentityProvider, HttpTextGenerator};
use resume_common::{
    AppConfig, AppError, BillingWebhookVerifier, SessionVerifier, WebhookVerifier,
};
use resume_db::{
    create_pool, PgResumeRepository, PgSubscriptionRepository, PgUserRepository,
};
use resume_service::services::{PriceTable, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
///
/// Health routes are mounted outside the middleware stack so probes bypass
/// rate limiting.
pub fn create_app(state: AppState) -> Router {
    let api = apply_middleware(
        create_router(),
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    health_routes().merge(api).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = resume_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Shared HTTP client for all provider integrations
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))?;

    // Provider clients
    let identity = Arc::new(HttpIdentityProvider::new(
        http_client.clone(),
        config.identity.api_url.clone(),
        config.identity.secret_key.clone(),
    ));
    let billing = Arc::new(HttpBillingProvider::new(
        http_client.clone(),
        config.billing.api_url.clone(),
        config.billing.secret_key.clone(),
        config.billing.portal_return_url.clone(),
    ));
    let generator = Arc::new(HttpTextGenerator::new(
        http_client,
        config.genai.api_url.clone(),
        config.genai.api_key.clone(),
        config.genai.model.clone(),
    ));

    // Repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let resume_repo = Arc::new(PgResumeRepository::new(pool.clone()));
    let subscription_repo = Arc::new(PgSubscriptionRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .resume_repo(resume_repo)
        .subscription_repo(subscription_repo)
        .identity(identity)
        .billing(billing)
        .generator(generator)
        .capacity(config.capacity.policy())
        .prices(PriceTable {
            pro_price_id: config.billing.pro_price_id.clone(),
            pro_plus_price_id: config.billing.pro_plus_price_id.clone(),
        })
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Inbound-request verifiers
    let session_verifier = SessionVerifier::new(&config.session.jwt_secret);
    let identity_webhooks = WebhookVerifier::new(&config.identity.webhook_secret)
        .map_err(|e| AppError::Config(format!("Invalid identity webhook secret: {e}")))?;
    let billing_webhooks = BillingWebhookVerifier::new(&config.billing.webhook_secret);

    Ok(AppState::new(
        service_context,
        config,
        session_verifier,
        identity_webhooks,
        billing_webhooks,
    ))
}

/// Run the HTTP server
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))?;

    info!("Server listening on http://{}", address);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &address).await
}
