//! Domain layer for the NextBus bot
//!
//! Contains the transit entities, outgoing chat messages, the slash-command
//! grammar, value objects, and domain errors. This layer performs no I/O.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use commands::{CommandDefinition, NextBusCommand, UsageError};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
