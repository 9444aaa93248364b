//! Domain entities - Request-scoped transit data and outgoing messages

mod direct_message;
mod transit;

pub use direct_message::{DirectMessage, MessageField, Post};
pub use transit::{
    Agency, BoundingBox, DirectionPredictions, GeoPoint, Prediction, Route, RouteConfig,
    RouteDirection, RoutePath, ServiceMessage, Stop, StopPredictions,
};
