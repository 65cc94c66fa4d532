//! Integration test utilities for the resume server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API, including signed webhook deliveries.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
