//! Error mapping for provider HTTP calls

use resume_core::error::DomainError;

/// Convert a transport failure to a DomainError
pub(crate) fn map_transport_error(service: &str, e: &reqwest::Error) -> DomainError {
    DomainError::ExternalServiceError(format!("{service}: {e}"))
}

/// Convert a non-success HTTP status to a DomainError
pub(crate) fn map_status_error(service: &str, status: reqwest::StatusCode) -> DomainError {
    DomainError::ExternalServiceError(format!("{service}: HTTP {status}"))
}
