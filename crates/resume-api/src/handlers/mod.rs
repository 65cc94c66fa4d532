//! Request handlers
//!
//! Handlers are thin adapters between HTTP and the service layer.

pub mod billing;
pub mod generation;
pub mod health;
pub mod resumes;
pub mod subscriptions;
pub mod users;
pub mod webhooks;
