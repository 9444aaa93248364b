//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod message_sink_port;
mod transit_feed_port;

#[cfg(test)]
pub use message_sink_port::MockMessageSinkPort;
pub use message_sink_port::MessageSinkPort;
#[cfg(test)]
pub use transit_feed_port::MockTransitFeedPort;
pub use transit_feed_port::TransitFeedPort;
