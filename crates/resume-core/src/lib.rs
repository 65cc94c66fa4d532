//! # resume-core
//!
//! Domain layer containing entities, value objects, repository and provider traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BorderStyle, Education, NewUser, Resume, Subscription, SubscriptionLevel, User, UserProfile,
    UserRole, WorkExperience,
};
pub use error::DomainError;
pub use traits::{
    Admission, BillingProvider, IdentityProvider, ProviderResult, RepoResult, ResumeRepository,
    SubscriptionRepository, TextGenerator, UserMetadata, UserRepository,
};
pub use value_objects::CapacityPolicy;
