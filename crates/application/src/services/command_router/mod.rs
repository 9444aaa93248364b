//! Command router - Execute `/nextbus` commands
//!
//! Each verb has its own sub-module:
//! - [`agencies`]: agency list as plain text
//! - [`routes`]: routes of an agency
//! - [`stops`]: stops of a route
//! - [`prediction`]: next departures at a stop
//! - [`help`]: usage text and the unsupported `schedules` verb
//!
//! Every command ends in exactly one [`CommandResponse`]. Failures never
//! escape as errors; they become inline replies for the invoking user.

mod agencies;
mod help;
mod prediction;
mod routes;
mod stops;

use std::{fmt, sync::Arc};

use domain::{BotIdentity, DirectMessage, NextBusCommand, Post, UserId};
use tracing::{debug, error, info, instrument};

use crate::{
    command_parser::{CommandParser, ParsedCommand},
    ports::{MessageSinkPort, TransitFeedPort},
};

/// Outcome of one command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResponse {
    /// The text was not addressed to the bot; nothing is shown
    Ignored,
    /// Inline reply visible only to the invoking user
    Ephemeral(String),
    /// A structured direct message was posted
    Delivered(Post),
}

impl CommandResponse {
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Text of an inline reply
    pub fn ephemeral_text(&self) -> Option<&str> {
        match self {
            Self::Ephemeral(text) => Some(text.as_str()),
            Self::Ignored | Self::Delivered(_) => None,
        }
    }
}

/// Routes command text to the transit feed and formats the results
pub struct CommandRouter {
    feed: Arc<dyn TransitFeedPort>,
    sink: Arc<dyn MessageSinkPort>,
    bot: BotIdentity,
    parser: CommandParser,
}

impl fmt::Debug for CommandRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRouter")
            .field("bot", &self.bot.username)
            .field("trigger", &self.parser.trigger())
            .finish_non_exhaustive()
    }
}

impl CommandRouter {
    /// Create a new command router
    pub fn new(
        feed: Arc<dyn TransitFeedPort>,
        sink: Arc<dyn MessageSinkPort>,
        bot: BotIdentity,
        parser: CommandParser,
    ) -> Self {
        Self {
            feed,
            sink,
            bot,
            parser,
        }
    }

    /// The account direct messages are sent from
    pub const fn bot(&self) -> &BotIdentity {
        &self.bot
    }

    /// Parse and execute one line of command text for `user`
    #[instrument(skip(self, user, text), fields(user_id = %user))]
    pub async fn execute(&self, user: &UserId, text: &str) -> CommandResponse {
        match self.parser.parse(text) {
            ParsedCommand::Ignored => {
                debug!("Text not addressed to the bot");
                CommandResponse::Ignored
            },
            ParsedCommand::Invalid(usage) => {
                debug!(reply = %usage, "Rejected command");
                CommandResponse::Ephemeral(usage.to_string())
            },
            ParsedCommand::Command(command) => self.execute_command(user, &command).await,
        }
    }

    /// Execute an already parsed command
    pub async fn execute_command(&self, user: &UserId, command: &NextBusCommand) -> CommandResponse {
        info!(verb = command.verb(), "Executing NextBus command");

        match command {
            NextBusCommand::ListAgencies => self.handle_agencies(user).await,
            NextBusCommand::ListRoutes { agency } => self.handle_routes(user, agency).await,
            NextBusCommand::ListStops { agency, route } => {
                self.handle_stops(user, agency, route).await
            },
            NextBusCommand::Predictions {
                agency,
                route,
                stop,
            } => self.handle_prediction(user, agency, route, stop).await,
            NextBusCommand::Schedules => {
                CommandResponse::Ephemeral(help::NOT_IMPLEMENTED_REPLY.to_string())
            },
            NextBusCommand::Help | NextBusCommand::Unknown { .. } => {
                CommandResponse::Ephemeral(help::help_text(self.parser.trigger()))
            },
        }
    }

    /// Post a direct message, reporting failure inline
    ///
    /// `label` names the post in the failure reply.
    async fn deliver(&self, user: &UserId, message: DirectMessage, label: &str) -> CommandResponse {
        match self.sink.post_direct_message(user, message).await {
            Ok(post) => {
                debug!(post_id = %post.id, channel_id = %post.channel_id, "Direct message posted");
                CommandResponse::Delivered(post)
            },
            Err(e) => {
                error!(error = %e, user_id = %user, "Couldn't send bot DM");
                CommandResponse::Ephemeral(format!("Error creating the NextBus {label} post"))
            },
        }
    }
}
