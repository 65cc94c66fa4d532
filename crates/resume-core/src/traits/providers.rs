//! Provider traits (ports) - interfaces to external hosted services
//!
//! Identity, billing, and text generation are delegated to third-party
//! services. Services depend on these traits so the integrations stay
//! swappable and the business logic stays testable in isolation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::UserRole;
use crate::error::DomainError;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, DomainError>;

/// Fields mirrored into the identity provider's public metadata.
///
/// This is a convenience cache for session claims, not a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMetadata {
    pub db_id: Uuid,
    pub role: UserRole,
}

/// Identity provider admin API
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Mirror local user fields into the provider's public metadata
    async fn sync_user_metadata(
        &self,
        external_id: &str,
        metadata: &UserMetadata,
    ) -> ProviderResult<()>;

    /// Delete the provider-side account (compensation for rejected signups)
    async fn delete_account(&self, external_id: &str) -> ProviderResult<()>;
}

/// Billing provider API
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Create a customer-portal session and return its redirect URL
    async fn create_portal_session(&self, customer_id: &str) -> ProviderResult<String>;
}

/// Generative-text provider API
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit a prompt with a fixed system instruction and return the
    /// response text
    async fn generate(&self, system_instruction: &str, user_message: &str)
        -> ProviderResult<String>;
}
