//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod nextbus_adapter;

pub use nextbus_adapter::NextBusAdapter;
