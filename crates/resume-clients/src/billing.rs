//! Billing provider API client
//!
//! Creates customer-portal sessions against the billing provider's
//! form-encoded REST API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use resume_core::traits::{BillingProvider, ProviderResult};

use crate::error::{map_status_error, map_transport_error};

const SERVICE: &str = "billing";

/// HTTP implementation of [`BillingProvider`]
#[derive(Clone)]
pub struct HttpBillingProvider {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
    portal_return_url: String,
}

#[derive(Debug, Deserialize)]
struct PortalSession {
    url: String,
}

impl HttpBillingProvider {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        secret_key: impl Into<String>,
        portal_return_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            secret_key: secret_key.into(),
            portal_return_url: portal_return_url.into(),
        }
    }
}

#[async_trait]
impl BillingProvider for HttpBillingProvider {
    #[instrument(skip(self))]
    async fn create_portal_session(&self, customer_id: &str) -> ProviderResult<String> {
        let response = self
            .client
            .post(format!("{}/v1/billing_portal/sessions", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&[
                ("customer", customer_id),
                ("return_url", &self.portal_return_url),
            ])
            .send()
            .await
            .map_err(|e| map_transport_error(SERVICE, &e))?;

        if !response.status().is_success() {
            return Err(map_status_error(SERVICE, response.status()));
        }

        let session: PortalSession = response
            .json()
            .await
            .map_err(|e| map_transport_error(SERVICE, &e))?;

        Ok(session.url)
    }
}

impl std::fmt::Debug for HttpBillingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBillingProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
