//! Session-token verification
//!
//! Sessions are issued by the external identity provider and carry the
//! provider's user id in the `sub` claim. The backend only verifies; it never
//! issues tokens (except in tests).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (external identity-provider user id)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Optional session id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
}

impl SessionClaims {
    /// The external identity-provider user id this session belongs to
    #[must_use]
    pub fn external_id(&self) -> &str {
        &self.sub
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Verifies session tokens with a shared HS256 secret
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
}

impl SessionVerifier {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Decode and validate a session token
    ///
    /// # Errors
    /// Returns an error if the token is invalid, tampered with, or expired
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Issue a token for the given external id
    ///
    /// In production tokens come from the identity provider; this exists for
    /// test fixtures that need valid sessions.
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, external_id: &str, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: external_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            sid: None,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))
    }
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier").finish_non_exhaustive()
    }
}
