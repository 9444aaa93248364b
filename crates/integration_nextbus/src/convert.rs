//! Conversions from feed payloads into domain entities
//!
//! The response types in [`crate::models`] follow the XML layout; the domain
//! crate only sees these converted values.

use domain::{
    Agency, BoundingBox, DirectionPredictions, GeoPoint, Prediction, Route, RouteConfig,
    RouteDirection, RoutePath, ServiceMessage, Stop, StopPredictions,
};

use crate::models::{
    FeedAgency, FeedDirection, FeedMessage, FeedPath, FeedPoint, FeedPrediction,
    FeedPredictionDirection, FeedPredictions, FeedRoute, FeedRouteConfig, FeedStop,
};

impl From<FeedAgency> for Agency {
    fn from(raw: FeedAgency) -> Self {
        Self {
            tag: raw.tag,
            title: raw.title,
            region_title: raw.region_title,
        }
    }
}

impl From<FeedRoute> for Route {
    fn from(raw: FeedRoute) -> Self {
        Self {
            tag: raw.tag,
            title: raw.title,
        }
    }
}

impl From<FeedPoint> for GeoPoint {
    fn from(raw: FeedPoint) -> Self {
        Self {
            lat: raw.lat,
            lon: raw.lon,
        }
    }
}

impl From<FeedStop> for Stop {
    fn from(raw: FeedStop) -> Self {
        Self {
            tag: raw.tag,
            title: raw.title,
            stop_id: raw.stop_id.filter(|id| !id.is_empty()),
            location: GeoPoint {
                lat: raw.lat,
                lon: raw.lon,
            },
        }
    }
}

impl From<FeedDirection> for RouteDirection {
    fn from(raw: FeedDirection) -> Self {
        Self {
            tag: raw.tag,
            title: raw.title,
            name: raw.name,
            use_for_ui: raw.use_for_ui,
            stop_tags: raw.stops.into_iter().map(|s| s.tag).collect(),
        }
    }
}

impl From<FeedPath> for RoutePath {
    fn from(raw: FeedPath) -> Self {
        Self {
            points: raw.points.into_iter().map(GeoPoint::from).collect(),
        }
    }
}

impl From<FeedRouteConfig> for RouteConfig {
    fn from(raw: FeedRouteConfig) -> Self {
        Self {
            tag: raw.tag,
            title: raw.title,
            color: raw.color,
            opposite_color: raw.opposite_color,
            bounds: BoundingBox {
                lat_min: raw.lat_min,
                lat_max: raw.lat_max,
                lon_min: raw.lon_min,
                lon_max: raw.lon_max,
            },
            stops: raw.stops.into_iter().map(Stop::from).collect(),
            directions: raw.directions.into_iter().map(RouteDirection::from).collect(),
            paths: raw.paths.into_iter().map(RoutePath::from).collect(),
        }
    }
}

impl From<FeedPrediction> for Prediction {
    fn from(raw: FeedPrediction) -> Self {
        Self {
            epoch_time: raw.epoch_time,
            seconds: raw.seconds,
            minutes: raw.minutes,
            is_departure: raw.is_departure,
            dir_tag: raw.dir_tag,
            vehicle: raw.vehicle,
            vehicles_in_consist: raw.vehicles_in_consist,
            block: raw.block,
            trip_tag: raw.trip_tag,
            affected_by_layover: raw.affected_by_layover,
        }
    }
}

impl From<FeedPredictionDirection> for DirectionPredictions {
    fn from(raw: FeedPredictionDirection) -> Self {
        Self {
            title: raw.title,
            predictions: raw.predictions.into_iter().map(Prediction::from).collect(),
        }
    }
}

impl From<FeedMessage> for ServiceMessage {
    fn from(raw: FeedMessage) -> Self {
        Self {
            text: raw.text,
            priority: raw.priority,
        }
    }
}

impl From<FeedPredictions> for StopPredictions {
    /// Only the first service message is kept
    fn from(raw: FeedPredictions) -> Self {
        Self {
            agency_title: raw.agency_title,
            route_title: raw.route_title,
            route_tag: raw.route_tag,
            stop_title: raw.stop_title,
            stop_tag: raw.stop_tag,
            no_predictions_direction: raw
                .dir_title_because_no_predictions
                .filter(|title| !title.is_empty()),
            directions: raw
                .directions
                .into_iter()
                .map(DirectionPredictions::from)
                .collect(),
            message: raw.messages.into_iter().next().map(ServiceMessage::from),
        }
    }
}
