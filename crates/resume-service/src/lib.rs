//! # resume-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;
