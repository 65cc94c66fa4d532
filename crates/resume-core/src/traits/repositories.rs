//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{NewUser, Resume, Subscription, User};
use crate::error::DomainError;
use crate::value_objects::CapacityPolicy;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Outcome of a successful capacity-gated admission
#[derive(Debug, Clone)]
pub struct Admission {
    /// The user row that was inserted
    pub user: User,
    /// The account that was evicted to make room, if any
    pub evicted: Option<User>,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by internal id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by the identity provider's id
    async fn find_by_external_id(&self, external_id: &str) -> RepoResult<Option<User>>;

    /// Total number of user rows
    async fn count(&self) -> RepoResult<i64>;

    /// Admit a new user under the capacity policy.
    ///
    /// The count check, the eviction delete, and the insert run inside a
    /// single serializable transaction so concurrent signups cannot race past
    /// the ceiling or double-evict the same candidate.
    ///
    /// # Errors
    /// Returns [`DomainError::UserCapacityExhausted`] when the ceiling is
    /// reached and no account qualifies for eviction.
    async fn admit(&self, user: &NewUser, policy: &CapacityPolicy) -> RepoResult<Admission>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Delete by the identity provider's id, cascading to owned rows.
    ///
    /// Deleting an absent user is a no-op success; returns whether a row was
    /// actually removed.
    async fn delete_by_external_id(&self, external_id: &str) -> RepoResult<bool>;
}

// ============================================================================
// Resume Repository
// ============================================================================

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Find resume by id
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Resume>>;

    /// List all resumes owned by a user, most recently updated first
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Resume>>;

    /// Number of resumes owned by a user
    async fn count_by_user(&self, user_id: Uuid) -> RepoResult<i64>;

    /// Create a new resume
    async fn create(&self, resume: &Resume) -> RepoResult<()>;

    /// Update an existing resume
    async fn update(&self, resume: &Resume) -> RepoResult<()>;

    /// Delete a resume
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Subscription Repository
// ============================================================================

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Find a user's subscription
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Option<Subscription>>;

    /// Insert or replace the subscription row for a user
    async fn upsert(&self, subscription: &Subscription) -> RepoResult<()>;

    /// Remove by the billing provider's subscription id; absent rows are a
    /// no-op success
    async fn delete_by_subscription_id(&self, subscription_id: &str) -> RepoResult<bool>;
}
