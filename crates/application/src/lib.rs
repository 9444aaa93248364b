//! Application layer - Use cases and orchestration
//!
//! Parses `/nextbus` command text, queries the transit feed through
//! [`TransitFeedPort`] and hands formatted replies to [`MessageSinkPort`].
//! Adapters in the infrastructure layer implement the ports.

pub mod command_parser;
pub mod error;
pub mod ports;
pub mod services;

pub use command_parser::{CommandParser, ParsedCommand};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
