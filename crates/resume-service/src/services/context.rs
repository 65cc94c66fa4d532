//! Service context - dependency container for services
//!
//! Holds repositories, provider clients, and policy configuration needed by
//! the services.

use std::sync::Arc;

use resume_core::entities::SubscriptionLevel;
use resume_core::traits::{
    BillingProvider, IdentityProvider, ResumeRepository, SubscriptionRepository, TextGenerator,
    UserRepository,
};
use resume_core::value_objects::CapacityPolicy;
use resume_db::PgPool;

/// Maps the billing provider's price ids onto feature tiers
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    pub pro_price_id: String,
    pub pro_plus_price_id: String,
}

impl PriceTable {
    /// Tier for a given price id; unknown prices grant nothing beyond free
    #[must_use]
    pub fn level_for(&self, price_id: &str) -> SubscriptionLevel {
        if price_id == self.pro_plus_price_id {
            SubscriptionLevel::ProPlus
        } else if price_id == self.pro_price_id {
            SubscriptionLevel::Pro
        } else {
            SubscriptionLevel::Free
        }
    }
}

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Provider clients (identity, billing, text generation)
/// - The user-capacity admission policy and price table
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (readiness checks)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    resume_repo: Arc<dyn ResumeRepository>,
    subscription_repo: Arc<dyn SubscriptionRepository>,

    // Provider clients
    identity: Arc<dyn IdentityProvider>,
    billing: Arc<dyn BillingProvider>,
    generator: Arc<dyn TextGenerator>,

    // Policy
    capacity: CapacityPolicy,
    prices: PriceTable,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        resume_repo: Arc<dyn ResumeRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        identity: Arc<dyn IdentityProvider>,
        billing: Arc<dyn BillingProvider>,
        generator: Arc<dyn TextGenerator>,
        capacity: CapacityPolicy,
        prices: PriceTable,
    ) -> Self {
        Self {
            pool,
            user_repo,
            resume_repo,
            subscription_repo,
            identity,
            billing,
            generator,
            capacity,
            prices,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the resume repository
    pub fn resume_repo(&self) -> &dyn ResumeRepository {
        self.resume_repo.as_ref()
    }

    /// Get the subscription repository
    pub fn subscription_repo(&self) -> &dyn SubscriptionRepository {
        self.subscription_repo.as_ref()
    }

    /// Get the identity provider client
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.identity.as_ref()
    }

    /// Get the billing provider client
    pub fn billing(&self) -> &dyn BillingProvider {
        self.billing.as_ref()
    }

    /// Get the text generation client
    pub fn generator(&self) -> &dyn TextGenerator {
        self.generator.as_ref()
    }

    /// Get the user-capacity admission policy
    pub fn capacity(&self) -> &CapacityPolicy {
        &self.capacity
    }

    /// Get the price-to-tier table
    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("capacity", &self.capacity)
            .field("prices", &self.prices)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    resume_repo: Option<Arc<dyn ResumeRepository>>,
    subscription_repo: Option<Arc<dyn SubscriptionRepository>>,
    identity: Option<Arc<dyn IdentityProvider>>,
    billing: Option<Arc<dyn BillingProvider>>,
    generator: Option<Arc<dyn TextGenerator>>,
    capacity: Option<CapacityPolicy>,
    prices: Option<PriceTable>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn resume_repo(mut self, repo: Arc<dyn ResumeRepository>) -> Self {
        self.resume_repo = Some(repo);
        self
    }

    pub fn subscription_repo(mut self, repo: Arc<dyn SubscriptionRepository>) -> Self {
        self.subscription_repo = Some(repo);
        self
    }

    pub fn identity(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity = Some(provider);
        self
    }

    pub fn billing(mut self, provider: Arc<dyn BillingProvider>) -> Self {
        self.billing = Some(provider);
        self
    }

    pub fn generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn capacity(mut self, policy: CapacityPolicy) -> Self {
        self.capacity = Some(policy);
        self
    }

    pub fn prices(mut self, prices: PriceTable) -> Self {
        self.prices = Some(prices);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.resume_repo
                .ok_or_else(|| ServiceError::validation("resume_repo is required"))?,
            self.subscription_repo
                .ok_or_else(|| ServiceError::validation("subscription_repo is required"))?,
            self.identity
                .ok_or_else(|| ServiceError::validation("identity is required"))?,
            self.billing
                .ok_or_else(|| ServiceError::validation("billing is required"))?,
            self.generator
                .ok_or_else(|| ServiceError::validation("generator is required"))?,
            self.capacity.unwrap_or_default(),
            self.prices.unwrap_or_default(),
        ))
    }
}
