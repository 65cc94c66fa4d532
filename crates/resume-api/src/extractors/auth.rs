//! Authentication extractor
//!
//! Extracts and validates session tokens from the Authorization header.
//! Tokens are issued by the identity provider and verified locally against
//! the shared signing secret.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The identity provider's user id (the `sub` claim)
    pub external_id: String,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access the session verifier
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .session_verifier()
            .verify(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid session token");
                ApiError::App(e)
            })?;

        Ok(AuthUser::new(claims.external_id()))
    }
}
