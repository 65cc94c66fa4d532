//! Request extractors
//!
//! Custom Axum extractors for authentication and validated JSON bodies.

pub mod auth;
pub mod validated;

pub use auth::AuthUser;
pub use validated::ValidatedJson;
