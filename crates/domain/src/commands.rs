//! Slash commands - Strongly typed representations of `/nextbus` invocations

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verbs understood after the trigger, in the order they are advertised
pub const VERBS: [&str; 6] = ["agencies", "routes", "stops", "prediction", "schedules", "help"];

/// All commands the bot can execute
///
/// Each variant carries the positional arguments its verb requires. Commands
/// are produced by the command parser from the raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NextBusCommand {
    /// List every agency published by the feed
    ListAgencies,

    /// List the routes of one agency
    ListRoutes {
        /// Agency tag
        agency: String,
    },

    /// List the stops of one route
    ListStops {
        /// Agency tag
        agency: String,
        /// Route tag
        route: String,
    },

    /// Show the next departures at a stop
    Predictions {
        /// Agency tag
        agency: String,
        /// Route tag
        route: String,
        /// Stop tag
        stop: String,
    },

    /// Route schedules (not offered by the bot)
    Schedules,

    /// Show help information
    Help,

    /// A verb the bot does not know
    Unknown {
        /// The verb as typed
        verb: String,
    },
}

impl NextBusCommand {
    /// The verb that selects this command
    pub fn verb(&self) -> &str {
        match self {
            Self::ListAgencies => "agencies",
            Self::ListRoutes { .. } => "routes",
            Self::ListStops { .. } => "stops",
            Self::Predictions { .. } => "prediction",
            Self::Schedules => "schedules",
            Self::Help => "help",
            Self::Unknown { verb } => verb,
        }
    }

    /// Whether executing the command queries the transit feed
    pub const fn queries_feed(&self) -> bool {
        matches!(
            self,
            Self::ListAgencies
                | Self::ListRoutes { .. }
                | Self::ListStops { .. }
                | Self::Predictions { .. }
        )
    }
}

/// A command that was addressed to the bot but cannot be executed as typed
///
/// The display text is the exact reply shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Only the trigger was given
    #[error("Missing command, please run `{trigger} help` to check all commands available.")]
    MissingCommand {
        /// The slash trigger, including the leading `/`
        trigger: String,
    },

    /// `routes` without exactly one agency tag
    #[error("Missing agency ID")]
    MissingAgency,

    /// `stops` without agency and route tags
    #[error("Missing agency and/or route")]
    MissingAgencyOrRoute,

    /// `prediction` without agency, route and stop tags
    #[error("Missing agency and/or route and/or stop")]
    MissingAgencyRouteOrStop,
}

/// Registration metadata a chat host needs to expose the slash command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Trigger word, without the leading `/`
    pub trigger: String,
    /// Name shown in the host's command list
    pub display_name: String,
    /// One-line description
    pub description: String,
    /// Whether the host should offer auto-completion
    pub auto_complete: bool,
    /// Text shown next to the auto-completion entry
    pub auto_complete_desc: String,
    /// Argument hint shown while typing
    pub auto_complete_hint: String,
}

impl CommandDefinition {
    /// Create a definition for the given trigger with the default metadata
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            display_name: "Next Bus".to_string(),
            description: "Next Bus Bot".to_string(),
            auto_complete: true,
            auto_complete_desc: format!("Available commands: {}", VERBS.join(", ")),
            auto_complete_hint: "[command]".to_string(),
        }
    }

    /// The trigger as typed by users, e.g. `/nextbus`
    pub fn slash_trigger(&self) -> String {
        format!("/{}", self.trigger)
    }
}
