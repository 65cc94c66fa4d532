//! Ports - traits implemented by the infrastructure layers

mod providers;
mod repositories;

pub use providers::{
    BillingProvider, IdentityProvider, ProviderResult, TextGenerator, UserMetadata,
};
pub use repositories::{
    Admission, RepoResult, ResumeRepository, SubscriptionRepository, UserRepository,
};
