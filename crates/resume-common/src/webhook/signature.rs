//! Webhook signature verification
//!
//! Two schemes are supported, matching the providers we receive events from:
//!
//! * Identity provider: HMAC-SHA256 over `{id}.{timestamp}.{payload}`, secret
//!   encoded as `whsec_<base64>`, signatures carried as space-separated
//!   `v1,<base64>` entries in the signature header.
//! * Billing provider: HMAC-SHA256 over `{timestamp}.{payload}`, signature
//!   header of the form `t=<unix>,v1=<hex>`.
//!
//! Both reject timestamps outside a five-minute window to limit replays.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Maximum allowed clock skew between the signed timestamp and now, in seconds
const TIMESTAMP_TOLERANCE_SECS: i64 = 300;

/// Webhook verification errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WebhookError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("Malformed signature header")]
    MalformedHeader,

    #[error("Invalid webhook secret")]
    InvalidSecret,

    #[error("Timestamp outside tolerance window")]
    TimestampOutOfTolerance,

    #[error("No signature matched")]
    SignatureMismatch,
}

/// Verifies identity-provider webhook signatures
#[derive(Clone)]
pub struct WebhookVerifier {
    key: Vec<u8>,
}

impl WebhookVerifier {
    /// Create a verifier from a `whsec_`-prefixed secret
    ///
    /// # Errors
    /// Returns an error if the secret is not valid base64 after the prefix
    pub fn new(secret: &str) -> Result<Self, WebhookError> {
        let encoded = secret.strip_prefix("whsec_").unwrap_or(secret);
        let key = BASE64
            .decode(encoded)
            .map_err(|_| WebhookError::InvalidSecret)?;
        Ok(Self { key })
    }

    /// Verify a webhook delivery
    ///
    /// `msg_id` and `timestamp` come from the delivery headers, `signatures`
    /// is the raw signature header value, `payload` is the raw request body.
    ///
    /// # Errors
    /// Returns an error if the timestamp is stale or no signature matches
    pub fn verify(
        &self,
        msg_id: &str,
        timestamp: &str,
        signatures: &str,
        payload: &[u8],
    ) -> Result<(), WebhookError> {
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| WebhookError::MalformedHeader)?;
        check_timestamp(ts)?;

        let expected = self.sign(msg_id, timestamp, payload);

        // The header may carry several versioned signatures; any v1 match passes
        for entry in signatures.split(' ') {
            let Some((version, sig)) = entry.split_once(',') else {
                continue;
            };
            if version == "v1" && constant_time_eq(sig.as_bytes(), expected.as_bytes()) {
                return Ok(());
            }
        }

        Err(WebhookError::SignatureMismatch)
    }

    /// Compute the signature for a delivery, base64-encoded.
    ///
    /// The inverse of [`verify`](Self::verify); used to construct deliveries
    /// in tests.
    #[must_use]
    pub fn sign(&self, msg_id: &str, timestamp: &str, payload: &[u8]) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        mac.update(msg_id.as_bytes());
        mac.update(b".");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);
        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier").finish_non_exhaustive()
    }
}

/// Verifies billing-provider webhook signatures
#[derive(Clone)]
pub struct BillingWebhookVerifier {
    key: Vec<u8>,
}

impl BillingWebhookVerifier {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }

    /// Verify a signature header of the form `t=<unix>,v1=<hex>`
    ///
    /// # Errors
    /// Returns an error if the header is malformed, the timestamp is stale,
    /// or the signature does not match
    pub fn verify(&self, header: &str, payload: &[u8]) -> Result<(), WebhookError> {
        let mut timestamp: Option<i64> = None;
        let mut candidates: Vec<&str> = Vec::new();

        for part in header.split(',') {
            match part.split_once('=') {
                Some(("t", v)) => {
                    timestamp = Some(v.parse().map_err(|_| WebhookError::MalformedHeader)?);
                }
                Some(("v1", v)) => candidates.push(v),
                _ => {}
            }
        }

        let ts = timestamp.ok_or(WebhookError::MalformedHeader)?;
        if candidates.is_empty() {
            return Err(WebhookError::MalformedHeader);
        }
        check_timestamp(ts)?;

        let expected = self.sign(ts, payload);
        for candidate in candidates {
            if constant_time_eq(candidate.as_bytes(), expected.as_bytes()) {
                return Ok(());
            }
        }

        Err(WebhookError::SignatureMismatch)
    }

    /// Compute the hex signature for a delivery.
    ///
    /// The inverse of [`verify`](Self::verify); used to construct deliveries
    /// in tests.
    #[must_use]
    pub fn sign(&self, timestamp: i64, payload: &[u8]) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        format!("{:x}", mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for BillingWebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BillingWebhookVerifier").finish_non_exhaustive()
    }
}

fn check_timestamp(ts: i64) -> Result<(), WebhookError> {
    let now = Utc::now().timestamp();
    if (now - ts).abs() > TIMESTAMP_TOLERANCE_SECS {
        return Err(WebhookError::TimestampOutOfTolerance);
    }
    Ok(())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
