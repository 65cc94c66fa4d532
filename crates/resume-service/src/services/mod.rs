//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod billing;
pub mod context;
pub mod error;
pub mod generation;
pub mod provisioning;
pub mod resume;
pub mod subscription;
pub mod user;

// Re-export all services for convenience
pub use billing::BillingService;
pub use context::{PriceTable, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use generation::GenerationService;
pub use provisioning::ProvisioningService;
pub use resume::ResumeService;
pub use subscription::{BillingEvent, SubscriptionService, SubscriptionUpdate};
pub use user::UserService;
