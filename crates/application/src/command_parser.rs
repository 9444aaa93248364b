//! Command parser - Split `/nextbus` command text into typed commands

use domain::{NextBusCommand, UsageError};
use tracing::debug;

/// Trigger used when none is configured
pub const DEFAULT_TRIGGER: &str = "nextbus";

/// Outcome of parsing one line of command text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// The text is not addressed to the bot
    Ignored,
    /// Addressed to the bot, but not executable as typed
    Invalid(UsageError),
    /// A command ready to execute
    Command(NextBusCommand),
}

/// Parser for `/nextbus <verb> [args...]`
///
/// Tokens are separated by any run of whitespace. The first token must be
/// the slash trigger, the second selects the verb and the rest are
/// positional arguments.
#[derive(Debug, Clone)]
pub struct CommandParser {
    trigger: String,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER)
    }
}

impl CommandParser {
    /// Create a parser for the given trigger word (with or without `/`)
    pub fn new(trigger: impl AsRef<str>) -> Self {
        let word = trigger.as_ref().trim().trim_start_matches('/');
        Self {
            trigger: format!("/{word}"),
        }
    }

    /// The slash trigger, e.g. `/nextbus`
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Parse one line of command text
    pub fn parse(&self, input: &str) -> ParsedCommand {
        let mut tokens = input.split_whitespace();

        if tokens.next() != Some(self.trigger.as_str()) {
            return ParsedCommand::Ignored;
        }

        let Some(verb) = tokens.next() else {
            return ParsedCommand::Invalid(UsageError::MissingCommand {
                trigger: self.trigger.clone(),
            });
        };

        let args: Vec<&str> = tokens.collect();
        debug!(verb, args = args.len(), "Parsed command text");

        match Self::build(verb, &args) {
            Ok(command) => ParsedCommand::Command(command),
            Err(e) => ParsedCommand::Invalid(e),
        }
    }

    fn build(verb: &str, args: &[&str]) -> Result<NextBusCommand, UsageError> {
        let command = match verb {
            "agencies" => NextBusCommand::ListAgencies,
            "routes" => match args {
                [agency] => NextBusCommand::ListRoutes {
                    agency: (*agency).to_string(),
                },
                _ => return Err(UsageError::MissingAgency),
            },
            "stops" => match args {
                [agency, route, ..] => NextBusCommand::ListStops {
                    agency: (*agency).to_string(),
                    route: (*route).to_string(),
                },
                _ => return Err(UsageError::MissingAgencyOrRoute),
            },
            "prediction" => match args {
                [agency, route, stop, ..] => NextBusCommand::Predictions {
                    agency: (*agency).to_string(),
                    route: (*route).to_string(),
                    stop: (*stop).to_string(),
                },
                _ => return Err(UsageError::MissingAgencyRouteOrStop),
            },
            "schedules" => NextBusCommand::Schedules,
            "help" => NextBusCommand::Help,
            other => NextBusCommand::Unknown {
                verb: other.to_string(),
            },
        };
        Ok(command)
    }
}
