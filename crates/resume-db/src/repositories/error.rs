//! Error handling utilities for repositories

use resume_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(external_id: &str) -> DomainError {
    DomainError::UserNotFound(external_id.to_string())
}

/// Create a "resume not found" error
pub fn resume_not_found(id: Uuid) -> DomainError {
    DomainError::ResumeNotFound(id)
}
