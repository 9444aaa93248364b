//! Transit feed port
//!
//! Typed access to the real-time transit feed. Adapters in the
//! infrastructure layer implement this port on top of a feed client and
//! convert its payloads into domain entities.

use async_trait::async_trait;
use domain::{Agency, Route, RouteConfig, StopPredictions};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for transit feed queries
///
/// `Ok(None)` and empty lists mean the feed answered without the requested
/// data; errors are reserved for failed requests and feed-reported errors.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitFeedPort: Send + Sync {
    /// All agencies published by the feed
    async fn list_agencies(&self) -> Result<Vec<Agency>, ApplicationError>;

    /// Routes operated by an agency
    async fn list_routes(&self, agency_tag: &str) -> Result<Vec<Route>, ApplicationError>;

    /// Stops, directions and paths of a route
    async fn route_config(
        &self,
        agency_tag: &str,
        route_tag: &str,
    ) -> Result<Option<RouteConfig>, ApplicationError>;

    /// Next arrivals at a stop, addressed by route and stop tag
    ///
    /// Only the bundle of the requested route is returned.
    async fn predictions(
        &self,
        agency_tag: &str,
        route_tag: &str,
        stop_tag: &str,
    ) -> Result<Option<StopPredictions>, ApplicationError>;

    /// Next arrivals at a stop, addressed by its public stop number
    ///
    /// One bundle per route serving the stop, in feed order.
    async fn predictions_by_stop_id(
        &self,
        agency_tag: &str,
        stop_id: &str,
    ) -> Result<Vec<StopPredictions>, ApplicationError>;
}
