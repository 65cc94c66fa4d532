//! # resume-clients
//!
//! HTTP implementations of the provider traits defined in `resume-core`:
//! the identity provider's admin API, the billing provider's portal API,
//! and the generative-text API.

pub mod billing;
pub mod genai;
pub mod identity;

mod error;

pub use billing::HttpBillingProvider;
pub use genai::HttpTextGenerator;
pub use identity::HttpIdentityProvider;
