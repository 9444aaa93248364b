//! User identifier value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Identifier of a chat user, as issued by the hosting chat platform
///
/// The platform owns the format; the only invariant enforced here is that
/// the identifier is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a user ID, rejecting blank input
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUserId(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_platform_id() {
        let id = UserId::new("8xq3jh1c5ibzmkr6yysmfo7k5o").unwrap();
        assert_eq!(id.as_str(), "8xq3jh1c5ibzmkr6yysmfo7k5o");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let id = UserId::new("  abc \n").unwrap();
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn rejects_blank_id() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new(" \t").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<UserId, _> = serde_json::from_str("\"bot-user\"");
        assert!(ok.is_ok());

        let blank: Result<UserId, _> = serde_json::from_str("\"\"");
        assert!(blank.is_err());
    }
}
