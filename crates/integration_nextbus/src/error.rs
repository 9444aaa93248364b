//! NextBus error types

use thiserror::Error;

/// Errors that can occur while querying the NextBus feed
#[derive(Debug, Error)]
pub enum NextBusError {
    /// The request could not be built (e.g. malformed base URL)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Connection to the feed failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The feed answered with a non-success HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The response body is not the XML document the command returns
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The feed reported an error inside an otherwise valid response
    #[error("{message}")]
    Feed {
        /// Error text, trimmed of surrounding whitespace
        message: String,
        /// The feed's advice on whether repeating the request may succeed
        should_retry: bool,
    },

    /// The feed command is not supported by this client
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl NextBusError {
    /// Returns true if repeating the request may succeed
    ///
    /// This is advisory only; the client never retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RequestFailed(_) => true,
            Self::Feed { should_retry, .. } => *should_retry,
            Self::InvalidRequest(_) | Self::ParseError(_) | Self::NotImplemented(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(NextBusError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(NextBusError::RequestFailed("HTTP 503".to_string()).is_retryable());
        assert!(NextBusError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(
            NextBusError::Feed {
                message: "Feed busy".to_string(),
                should_retry: true,
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!NextBusError::InvalidRequest("test".to_string()).is_retryable());
        assert!(!NextBusError::ParseError("test".to_string()).is_retryable());
        assert!(!NextBusError::NotImplemented("schedule").is_retryable());
        assert!(
            !NextBusError::Feed {
                message: "Agency parameter \"a=nope\" is not valid.".to_string(),
                should_retry: false,
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_display() {
        let err = NextBusError::Feed {
            message: "Could not get route \"XYZ\" for agency tag \"sf-muni\".".to_string(),
            should_retry: false,
        };
        assert_eq!(
            err.to_string(),
            "Could not get route \"XYZ\" for agency tag \"sf-muni\"."
        );

        let err = NextBusError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));

        let err = NextBusError::NotImplemented("vehicleLocations");
        assert_eq!(err.to_string(), "Not implemented: vehicleLocations");
    }
}
