//! NextBus CLI
//!
//! Runs slash-command text through the bot locally, printing the replies
//! and direct messages to stdout.

#![allow(clippy::print_stdout)]

mod sink;

use std::sync::Arc;

use anyhow::Context;
use application::{CommandParser, CommandResponse, CommandRouter, MessageSinkPort};
use clap::{Parser, Subcommand};
use domain::UserId;
use infrastructure::{AppConfig, NextBusAdapter, init_logging};
use tracing::{debug, info};

use crate::sink::ConsoleMessageSink;

/// NextBus CLI
#[derive(Parser)]
#[command(name = "nextbus-cli")]
#[command(author, version, about = "NextBus transit bot CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (extension optional)
    #[arg(short, long, env = "NEXTBUS_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a slash command as the given user
    ///
    /// Example: nextbus-cli exec --user alice /nextbus routes sf-muni
    Exec {
        /// ID of the invoking user
        #[arg(short, long, default_value = "cli-user")]
        user: String,

        /// Command text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        text: Vec<String>,
    },

    /// Print the slash-command registration as JSON
    Definition,
}

/// Determine log filter level from verbosity count
///
/// Without `-v` the configured level (or `RUST_LOG`) applies.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn load_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(file) => AppConfig::load_from(file),
        None => AppConfig::load(),
    }
    .context("failed to load configuration")?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;
    Ok(config)
}

async fn exec(config: &AppConfig, user: &str, text: &str) -> anyhow::Result<()> {
    let bot = config.bot_identity()?;
    let user = UserId::new(user)?;

    let feed = Arc::new(NextBusAdapter::from_config(&config.nextbus)?);
    let sink = Arc::new(ConsoleMessageSink::stdout(bot.clone()));
    let router = CommandRouter::new(
        feed,
        sink.clone(),
        bot,
        CommandParser::new(&config.command.trigger),
    );

    match router.execute(&user, text).await {
        CommandResponse::Ignored => {
            info!("Text is not a {} command", config.command.trigger);
        },
        CommandResponse::Ephemeral(reply) => sink.post_ephemeral(&user, &reply).await,
        CommandResponse::Delivered(post) => {
            debug!(post_id = %post.id, channel_id = %post.channel_id, "Direct message delivered");
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Exec { user, text } => exec(&config, &user, &text.join(" ")).await?,
        Commands::Definition => {
            let json = serde_json::to_string_pretty(&config.command_definition())?;
            println!("{json}");
        },
    }

    Ok(())
}
