//! Bot account and slash-command registration settings

use domain::{BotIdentity, CommandDefinition, DomainError, UserId};
use serde::{Deserialize, Serialize};

use super::default_true;

/// Bot account the replies are posted as
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Platform user ID of the bot account
    #[serde(default = "default_bot_username")]
    pub user_id: String,

    /// Login name of the bot account
    #[serde(default = "default_bot_username")]
    pub username: String,

    /// Name shown next to the bot's posts
    #[serde(default = "default_bot_display_name")]
    pub display_name: String,
}

fn default_bot_username() -> String {
    "nextbusbot".to_string()
}

fn default_bot_display_name() -> String {
    "NextBusbot".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            user_id: default_bot_username(),
            username: default_bot_username(),
            display_name: default_bot_display_name(),
        }
    }
}

impl BotConfig {
    /// Build the bot identity handed to the command router
    pub fn to_identity(&self) -> Result<BotIdentity, DomainError> {
        BotIdentity::try_new(
            UserId::new(self.user_id.as_str())?,
            &self.username,
            &self.display_name,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_identity()
            .map(|_| ())
            .map_err(|e| format!("bot: {e}"))
    }
}

/// Slash-command trigger and registration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Trigger word, without the leading `/`
    #[serde(default = "default_trigger")]
    pub trigger: String,

    #[serde(default = "default_command_display_name")]
    pub display_name: String,

    #[serde(default = "default_command_description")]
    pub description: String,

    #[serde(default = "default_true")]
    pub auto_complete: bool,

    #[serde(default = "default_auto_complete_hint")]
    pub auto_complete_hint: String,
}

fn default_trigger() -> String {
    "nextbus".to_string()
}

fn default_command_display_name() -> String {
    "Next Bus".to_string()
}

fn default_command_description() -> String {
    "Next Bus Bot".to_string()
}

fn default_auto_complete_hint() -> String {
    "[command]".to_string()
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            display_name: default_command_display_name(),
            description: default_command_description(),
            auto_complete: true,
            auto_complete_hint: default_auto_complete_hint(),
        }
    }
}

impl CommandConfig {
    /// Registration metadata for the host
    ///
    /// The auto-complete description always lists the supported verbs.
    #[must_use]
    pub fn to_definition(&self) -> CommandDefinition {
        CommandDefinition {
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            auto_complete: self.auto_complete,
            auto_complete_hint: self.auto_complete_hint.clone(),
            ..CommandDefinition::new(self.trigger.trim_start_matches('/'))
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let trigger = self.trigger.trim_start_matches('/');
        if trigger.is_empty() {
            return Err("command.trigger must not be empty".to_string());
        }
        if trigger.contains(char::is_whitespace) {
            return Err(format!(
                "command.trigger must be a single word, got '{}'",
                self.trigger
            ));
        }
        Ok(())
    }
}
