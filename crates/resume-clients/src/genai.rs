//! Generative-text API client
//!
//! Calls the hosted model's generateContent endpoint with a system
//! instruction plus a single user message and returns the concatenated
//! response text.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use resume_core::error::DomainError;
use resume_core::traits::{ProviderResult, TextGenerator};

use crate::error::{map_status_error, map_transport_error};

const SERVICE: &str = "genai";

/// HTTP implementation of [`TextGenerator`]
#[derive(Clone)]
pub struct HttpTextGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl HttpTextGenerator {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    #[instrument(skip(self, system_instruction, user_message))]
    async fn generate(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> ProviderResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let body = json!({
            "system_instruction": {
                "parts": [{ "text": system_instruction }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": user_message }]
            }]
        });

        let response = self
            .client
            .post(url)
            .query(&[("key", &self.api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(SERVICE, &e))?;

        if !response.status().is_success() {
            return Err(map_status_error(SERVICE, response.status()));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| map_transport_error(SERVICE, &e))?;

        let text = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(DomainError::ExternalServiceError(
                "genai: empty response".to_string(),
            ));
        }

        Ok(text)
    }
}

impl std::fmt::Debug for HttpTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTextGenerator")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
