//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid user identifier
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
