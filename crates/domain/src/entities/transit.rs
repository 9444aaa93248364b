//! Transit entities
//!
//! Read-only, request-scoped views of the data published by the NextBus
//! real-time feed. Every value is built from a single feed response and
//! dropped once the reply to the user has been formatted.

use serde::{Deserialize, Serialize};

/// A transit operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    /// Short identifier used in feed queries (e.g. `sf-muni`)
    pub tag: String,
    /// Display name
    pub title: String,
    /// Region the agency operates in
    pub region_title: String,
}

/// A transit line operated by an agency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Short identifier used in feed queries
    pub tag: String,
    /// Display name
    pub title: String,
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

/// Geographic extent of a route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern bound
    pub lat_min: f64,
    /// Northern bound
    pub lat_max: f64,
    /// Western bound
    pub lon_min: f64,
    /// Eastern bound
    pub lon_max: f64,
}

/// A physical stop on a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Route-scoped stop identifier
    pub tag: String,
    /// Display name
    pub title: String,
    /// Agency-wide public stop number, when the agency publishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_id: Option<String>,
    /// Stop location
    pub location: GeoPoint,
}

/// A direction of travel along a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDirection {
    /// Direction identifier
    pub tag: String,
    /// Display name (e.g. "Outbound to Ocean Beach")
    pub title: String,
    /// Short name (e.g. "Outbound")
    pub name: String,
    /// Whether the direction should be offered in user interfaces
    pub use_for_ui: bool,
    /// Tags of the stops served in this direction, in travel order
    pub stop_tags: Vec<String>,
}

/// A drawable segment of a route
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutePath {
    /// Ordered points of the segment
    pub points: Vec<GeoPoint>,
}

/// Full description of one route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route identifier
    pub tag: String,
    /// Display name
    pub title: String,
    /// Route colour (hex, without `#`)
    pub color: String,
    /// Contrasting text colour (hex, without `#`)
    pub opposite_color: String,
    /// Geographic extent
    pub bounds: BoundingBox,
    /// Stops served by the route
    pub stops: Vec<Stop>,
    /// Directions of travel
    pub directions: Vec<RouteDirection>,
    /// Map segments
    pub paths: Vec<RoutePath>,
}

impl RouteConfig {
    /// A route configuration without stops carries nothing to show
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// One predicted arrival or departure of a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted time as Unix epoch milliseconds
    pub epoch_time: u64,
    /// Seconds until the vehicle arrives
    pub seconds: u32,
    /// Minutes until the vehicle arrives
    pub minutes: u32,
    /// Whether the prediction is a departure rather than an arrival
    pub is_departure: bool,
    /// Direction identifier of the trip
    pub dir_tag: String,
    /// Vehicle identifier
    pub vehicle: String,
    /// Number of vehicles coupled together, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles_in_consist: Option<u32>,
    /// Block (vehicle assignment) identifier
    pub block: String,
    /// Trip identifier
    pub trip_tag: String,
    /// Whether the prediction depends on a vehicle finishing its layover
    pub affected_by_layover: bool,
}

/// Predictions grouped by direction of travel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionPredictions {
    /// Direction display name
    pub title: String,
    /// Predictions in chronological order
    pub predictions: Vec<Prediction>,
}

/// A service notice attached to predictions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMessage {
    /// Notice text
    pub text: String,
    /// Priority as reported by the feed (e.g. `Normal`, `High`)
    pub priority: String,
}

/// Arrival predictions for one stop on one route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopPredictions {
    /// Agency display name
    pub agency_title: String,
    /// Route display name
    pub route_title: String,
    /// Route identifier
    pub route_tag: String,
    /// Stop display name
    pub stop_title: String,
    /// Stop identifier
    pub stop_tag: String,
    /// Direction title sent instead of predictions when none are available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_predictions_direction: Option<String>,
    /// Predictions per direction
    pub directions: Vec<DirectionPredictions>,
    /// Service notice, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ServiceMessage>,
}

impl StopPredictions {
    /// Total number of predictions across all directions
    pub fn prediction_count(&self) -> usize {
        self.directions.iter().map(|d| d.predictions.len()).sum()
    }
}
