//! Identity provider admin API client
//!
//! Talks to the hosted identity service with a bearer secret key. Only two
//! operations are needed: mirroring metadata onto an account and deleting an
//! account.

use async_trait::async_trait;
use serde_json::json;
use tracing::instrument;

use resume_core::traits::{IdentityProvider, ProviderResult, UserMetadata};

use crate::error::{map_status_error, map_transport_error};

const SERVICE: &str = "identity";

/// HTTP implementation of [`IdentityProvider`]
#[derive(Clone)]
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl HttpIdentityProvider {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            secret_key: secret_key.into(),
        }
    }

    fn user_url(&self, external_id: &str, suffix: &str) -> String {
        format!("{}/v1/users/{external_id}{suffix}", self.base_url)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    #[instrument(skip(self, metadata))]
    async fn sync_user_metadata(
        &self,
        external_id: &str,
        metadata: &UserMetadata,
    ) -> ProviderResult<()> {
        let body = json!({
            "public_metadata": {
                "db_id": metadata.db_id,
                "role": metadata.role.as_str(),
            }
        });

        let response = self
            .client
            .patch(self.user_url(external_id, "/metadata"))
            .bearer_auth(&self.secret_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(SERVICE, &e))?;

        if !response.status().is_success() {
            return Err(map_status_error(SERVICE, response.status()));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, external_id: &str) -> ProviderResult<()> {
        let response = self
            .client
            .delete(self.user_url(external_id, ""))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| map_transport_error(SERVICE, &e))?;

        // The account may already be gone on the provider side
        if !response.status().is_success() && response.status() != reqwest::StatusCode::NOT_FOUND {
            return Err(map_status_error(SERVICE, response.status()));
        }

        Ok(())
    }
}

impl std::fmt::Debug for HttpIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpIdentityProvider")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
