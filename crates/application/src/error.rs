//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The transit feed rejected the request
    #[error("NextBus feed error: {0}")]
    TransitFeed(String),

    /// External service error (transport or malformed response)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The requested operation is not supported
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// A message could not be delivered to the user
    #[error("Delivery failed: {0}")]
    Delivery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Advisory only; nothing in the bot retries.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}
