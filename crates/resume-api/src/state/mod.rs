//! Application state
//!
//! Holds the shared state for the Axum application including the service
//! context, configuration, and the inbound-request verifiers.

use std::sync::Arc;

use resume_common::{AppConfig, BillingWebhookVerifier, SessionVerifier, WebhookVerifier};
use resume_service::services::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Session-token verifier for authenticated endpoints
    session_verifier: Arc<SessionVerifier>,
    /// Signature verifier for identity-provider webhooks
    identity_webhooks: Arc<WebhookVerifier>,
    /// Signature verifier for billing-provider webhooks
    billing_webhooks: Arc<BillingWebhookVerifier>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        session_verifier: SessionVerifier,
        identity_webhooks: WebhookVerifier,
        billing_webhooks: BillingWebhookVerifier,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            session_verifier: Arc::new(session_verifier),
            identity_webhooks: Arc::new(identity_webhooks),
            billing_webhooks: Arc::new(billing_webhooks),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the session-token verifier
    pub fn session_verifier(&self) -> &SessionVerifier {
        &self.session_verifier
    }

    /// Get the identity-webhook signature verifier
    pub fn identity_webhooks(&self) -> &WebhookVerifier {
        &self.identity_webhooks
    }

    /// Get the billing-webhook signature verifier
    pub fn billing_webhooks(&self) -> &BillingWebhookVerifier {
        &self.billing_webhooks
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish_non_exhaustive()
    }
}
