//! Application services - Use case implementations

mod command_router;

pub use command_router::{CommandResponse, CommandRouter};
