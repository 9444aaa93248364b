//! Value Objects - Immutable, identity-less domain primitives

mod bot_identity;
mod user_id;

pub use bot_identity::BotIdentity;
pub use user_id::UserId;
