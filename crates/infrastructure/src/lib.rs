//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and provides the
//! process-wide configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, BotConfig, CommandConfig, LoggingConfig};
pub use telemetry::{TelemetryError, init_logging};
