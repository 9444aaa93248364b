//! NextBus feed integration
//!
//! Client for the NextBus public XML feed
//! (<http://webservices.nextbus.com/service/publicXMLFeed>), which publishes
//! agencies, routes, stops and real-time arrival predictions for a number of
//! North American transit operators.
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern of the other integration crates.
//! [`NextBusClient`] defines one method per feed command and is implemented by
//! [`HttpNextBusClient`]. Each call performs a single HTTP GET, decodes the XML
//! body into a response type from [`models`], and checks it through the
//! [`FeedResponse`] trait for an embedded `<Error>` before returning it.
//! The [`convert`] module maps the XML-shaped payloads onto `domain` entities.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_nextbus::{HttpNextBusClient, NextBusClient, NextBusConfig};
//!
//! let client = HttpNextBusClient::new(&NextBusConfig::default())?;
//! let routes = client.list_routes("sf-muni").await?;
//! ```

mod client;
mod config;
pub mod convert;
mod error;
pub mod models;

pub use client::{HttpNextBusClient, NextBusClient};
pub use config::NextBusConfig;
pub use error::NextBusError;
pub use models::{
    AgencyListResponse, FeedError, FeedResponse, PredictionsResponse, RouteConfigResponse,
    RouteListResponse,
};
