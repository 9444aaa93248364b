//! Bot account identity

use serde::{Deserialize, Serialize};

use super::UserId;
use crate::errors::DomainError;

/// The chat account the bot posts as
///
/// Provisioned by the host when the bot is activated and handed to the
/// command router at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    /// Platform user ID of the bot account
    pub user_id: UserId,
    /// Login name of the bot account
    pub username: String,
    /// Name shown next to the bot's posts
    pub display_name: String,
}

impl BotIdentity {
    pub fn new(user_id: UserId, username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            display_name: display_name.into(),
        }
    }

    /// Create an identity, validating the login name
    ///
    /// The username must be a single non-blank word and is stored without a
    /// leading `@`.
    pub fn try_new(
        user_id: UserId,
        username: &str,
        display_name: &str,
    ) -> Result<Self, DomainError> {
        let username = username.trim().trim_start_matches('@');
        if username.is_empty() {
            return Err(DomainError::ValidationError(
                "bot username must not be empty".to_string(),
            ));
        }
        if username.contains(char::is_whitespace) {
            return Err(DomainError::ValidationError(format!(
                "bot username must be a single word, got '{username}'"
            )));
        }

        let display_name = match display_name.trim() {
            "" => username,
            name => name,
        };
        Ok(Self::new(user_id, username, display_name))
    }

    /// Mention string for the bot, e.g. `@nextbusbot`
    pub fn mention(&self) -> String {
        format!("@{}", self.username)
    }
}
