//! Application configuration
//!
//! Split into focused sub-modules:
//! - `bot`: bot account and slash-command registration
//! - `logging`: log level and output format
//!
//! The `nextbus` section is the feed client's own [`NextBusConfig`].

mod bot;
mod logging;

use application::ApplicationError;
use domain::{BotIdentity, CommandDefinition};
use integration_nextbus::NextBusConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use bot::{BotConfig, CommandConfig};
pub use logging::LoggingConfig;

/// Prefix of environment variables overriding the configuration
pub const ENV_PREFIX: &str = "NEXTBUS";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bot account
    #[serde(default)]
    pub bot: BotConfig,

    /// Slash command
    #[serde(default)]
    pub command: CommandConfig,

    /// NextBus feed client
    #[serde(default)]
    pub nextbus: NextBusConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file (if present) and the environment
    ///
    /// `file` is resolved like `config::File::with_name`, so the extension
    /// may be omitted. Environment variables take precedence, nested with a
    /// double underscore (e.g. `NEXTBUS__NEXTBUS__TIMEOUT_SECS=5`).
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("command.trigger", "nextbus")?
            .set_default("logging.level", "info")?
            // Load from file if exists
            .add_source(config::File::with_name(file).required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            trigger = %config.command.trigger,
            base_url = %config.nextbus.base_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.bot.validate()?;
        self.command.validate()?;
        self.nextbus
            .validate()
            .map_err(|e| format!("nextbus: {e}"))?;
        self.logging.validate()
    }

    /// Bot identity for the command router
    pub fn bot_identity(&self) -> Result<BotIdentity, ApplicationError> {
        Ok(self.bot.to_identity()?)
    }

    /// Slash-command registration metadata
    #[must_use]
    pub fn command_definition(&self) -> CommandDefinition {
        self.command.to_definition()
    }
}
