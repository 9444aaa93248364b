//! NextBus response model
//!
//! Typed mirrors of the XML documents returned by each feed command. Every
//! document has a `<body>` root that either carries an `<Error>` element or
//! the command's payload; the root name itself is not checked.
//!
//! Attributes are mapped with the `@name` convention of `quick-xml`'s serde
//! support, character content with `$text`.

use serde::Deserialize;

use crate::error::NextBusError;

/// Access to the error a feed response may embed
///
/// Implemented by every response type so the client can reject error
/// documents generically, whatever command produced them.
pub trait FeedResponse {
    /// The embedded feed error, if the response carries one
    ///
    /// When this returns `Some`, the rest of the response must not be used.
    fn error_if_any(&self) -> Option<NextBusError>;
}

/// `<Error shouldRetry="...">message</Error>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedError {
    /// Whether the feed suggests repeating the request
    #[serde(rename = "@shouldRetry", default)]
    pub should_retry: bool,
    /// Raw error text, usually padded with newlines
    #[serde(rename = "$text", default)]
    pub message: String,
}

impl FeedError {
    /// Convert into a client error with the message trimmed
    pub fn to_error(&self) -> NextBusError {
        NextBusError::Feed {
            message: self.message.trim().to_string(),
            should_retry: self.should_retry,
        }
    }
}

// --- agencyList ---

/// Response to `command=agencyList`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgencyListResponse {
    #[serde(rename = "Error", default)]
    pub error: Option<FeedError>,
    #[serde(rename = "agency", default)]
    pub agencies: Vec<FeedAgency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedAgency {
    #[serde(rename = "@tag", default)]
    pub tag: String,
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "@regionTitle", default)]
    pub region_title: String,
}

impl FeedResponse for AgencyListResponse {
    fn error_if_any(&self) -> Option<NextBusError> {
        self.error.as_ref().map(FeedError::to_error)
    }
}

// --- routeList ---

/// Response to `command=routeList`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RouteListResponse {
    #[serde(rename = "Error", default)]
    pub error: Option<FeedError>,
    #[serde(rename = "route", default)]
    pub routes: Vec<FeedRoute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedRoute {
    #[serde(rename = "@tag", default)]
    pub tag: String,
    #[serde(rename = "@title", default)]
    pub title: String,
}

impl FeedResponse for RouteListResponse {
    fn error_if_any(&self) -> Option<NextBusError> {
        self.error.as_ref().map(FeedError::to_error)
    }
}

// --- routeConfig ---

/// Response to `command=routeConfig`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RouteConfigResponse {
    #[serde(rename = "Error", default)]
    pub error: Option<FeedError>,
    #[serde(rename = "route", default)]
    pub route: Option<FeedRouteConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedRouteConfig {
    #[serde(rename = "@tag", default)]
    pub tag: String,
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "@color", default)]
    pub color: String,
    #[serde(rename = "@oppositeColor", default)]
    pub opposite_color: String,
    #[serde(rename = "@latMin", default)]
    pub lat_min: f64,
    #[serde(rename = "@latMax", default)]
    pub lat_max: f64,
    #[serde(rename = "@lonMin", default)]
    pub lon_min: f64,
    #[serde(rename = "@lonMax", default)]
    pub lon_max: f64,
    #[serde(rename = "stop", default)]
    pub stops: Vec<FeedStop>,
    #[serde(rename = "direction", default)]
    pub directions: Vec<FeedDirection>,
    #[serde(rename = "path", default)]
    pub paths: Vec<FeedPath>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedStop {
    #[serde(rename = "@tag", default)]
    pub tag: String,
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "@stopId", default)]
    pub stop_id: Option<String>,
    #[serde(rename = "@lat", default)]
    pub lat: f64,
    #[serde(rename = "@lon", default)]
    pub lon: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedDirection {
    #[serde(rename = "@tag", default)]
    pub tag: String,
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "@name", default)]
    pub name: String,
    #[serde(rename = "@useForUI", default)]
    pub use_for_ui: bool,
    #[serde(rename = "stop", default)]
    pub stops: Vec<FeedStopRef>,
}

/// `<stop tag="..."/>` inside a `<direction>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedStopRef {
    #[serde(rename = "@tag", default)]
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedPath {
    #[serde(rename = "point", default)]
    pub points: Vec<FeedPoint>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct FeedPoint {
    #[serde(rename = "@lat", default)]
    pub lat: f64,
    #[serde(rename = "@lon", default)]
    pub lon: f64,
}

impl FeedResponse for RouteConfigResponse {
    fn error_if_any(&self) -> Option<NextBusError> {
        self.error.as_ref().map(FeedError::to_error)
    }
}

// --- predictions ---

/// Response to `command=predictions`
///
/// A stop-tag query yields one `<predictions>` element. A `stopId` query
/// yields one per route serving the stop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PredictionsResponse {
    #[serde(rename = "Error", default)]
    pub error: Option<FeedError>,
    #[serde(rename = "predictions", default)]
    pub predictions: Vec<FeedPredictions>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedPredictions {
    #[serde(rename = "@agencyTitle", default)]
    pub agency_title: String,
    #[serde(rename = "@routeTitle", default)]
    pub route_title: String,
    #[serde(rename = "@routeTag", default)]
    pub route_tag: String,
    #[serde(rename = "@stopTitle", default)]
    pub stop_title: String,
    #[serde(rename = "@stopTag", default)]
    pub stop_tag: String,
    #[serde(rename = "@dirTitleBecauseNoPredictions", default)]
    pub dir_title_because_no_predictions: Option<String>,
    #[serde(rename = "direction", default)]
    pub directions: Vec<FeedPredictionDirection>,
    #[serde(rename = "message", default)]
    pub messages: Vec<FeedMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedPredictionDirection {
    #[serde(rename = "@title", default)]
    pub title: String,
    #[serde(rename = "prediction", default)]
    pub predictions: Vec<FeedPrediction>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedPrediction {
    #[serde(rename = "@epochTime", default)]
    pub epoch_time: u64,
    #[serde(rename = "@seconds", default)]
    pub seconds: u32,
    #[serde(rename = "@minutes", default)]
    pub minutes: u32,
    #[serde(rename = "@isDeparture", default)]
    pub is_departure: bool,
    #[serde(rename = "@dirTag", default)]
    pub dir_tag: String,
    #[serde(rename = "@vehicle", default)]
    pub vehicle: String,
    #[serde(rename = "@vehiclesInConsist", default)]
    pub vehicles_in_consist: Option<u32>,
    #[serde(rename = "@block", default)]
    pub block: String,
    #[serde(rename = "@tripTag", default)]
    pub trip_tag: String,
    #[serde(rename = "@affectedByLayover", default)]
    pub affected_by_layover: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedMessage {
    #[serde(rename = "@text", default)]
    pub text: String,
    #[serde(rename = "@priority", default)]
    pub priority: String,
}

impl FeedResponse for PredictionsResponse {
    fn error_if_any(&self) -> Option<NextBusError> {
        self.error.as_ref().map(FeedError::to_error)
    }
}

#[cfg(test)]
mod tests {
    use quick_xml::de::from_str;

    use super::*;

    #[test]
    fn test_decode_agency_list() {
        let xml = r#"<?xml version="1.0" encoding="utf-8" ?>
            <body copyright="All data copyright agencies listed below and NextBus Inc 2024.">
              <agency tag="actransit" title="AC Transit" regionTitle="California-Northern"/>
              <agency tag="sf-muni" title="San Francisco Muni" shortTitle="SF Muni" regionTitle="California-Northern"/>
            </body>"#;

        let resp: AgencyListResponse = from_str(xml).unwrap();
        assert!(resp.error.is_none());
        assert_eq!(
            resp.agencies,
            vec![
                FeedAgency {
                    tag: "actransit".to_string(),
                    title: "AC Transit".to_string(),
                    region_title: "California-Northern".to_string(),
                },
                FeedAgency {
                    tag: "sf-muni".to_string(),
                    title: "San Francisco Muni".to_string(),
                    region_title: "California-Northern".to_string(),
                },
            ]
        );
        assert!(resp.error_if_any().is_none());
    }

    #[test]
    fn test_decode_empty_body() {
        let resp: AgencyListResponse = from_str(r#"<body copyright="x"></body>"#).unwrap();
        assert!(resp.agencies.is_empty());
        assert!(resp.error_if_any().is_none());
    }

    #[test]
    fn test_decode_route_list() {
        let xml = r#"<body copyright="x">
              <route tag="E" title="E-Embarcadero"/>
              <route tag="N" title="N-Judah"/>
            </body>"#;

        let resp: RouteListResponse = from_str(xml).unwrap();
        assert_eq!(resp.routes.len(), 2);
        assert_eq!(resp.routes[1].tag, "N");
        assert_eq!(resp.routes[1].title, "N-Judah");
    }

    #[test]
    fn test_decode_route_config() {
        let xml = r#"<body copyright="x">
              <route tag="N" title="N-Judah" color="003399" oppositeColor="ffffff"
                     latMin="37.7601699" latMax="37.7932299" lonMin="-122.5092" lonMax="-122.38798">
                <stop tag="5240" title="King St &amp; 4th St" lat="37.7760599" lon="-122.39436" stopId="15240"/>
                <stop tag="3909" title="Carl St &amp; Cole St" lat="37.76568" lon="-122.4500299"/>
                <direction tag="N____O_F00" title="Outbound to Ocean Beach" name="Outbound" useForUI="true">
                  <stop tag="5240"/>
                  <stop tag="3909"/>
                </direction>
                <direction tag="N____I_F00" title="Inbound to Caltrain" name="Inbound" useForUI="false">
                  <stop tag="3909"/>
                </direction>
                <path>
                  <point lat="37.7760599" lon="-122.39436"/>
                  <point lat="37.76568" lon="-122.4500299"/>
                </path>
              </route>
            </body>"#;

        let resp: RouteConfigResponse = from_str(xml).unwrap();
        let route = resp.route.unwrap();
        assert_eq!(route.tag, "N");
        assert_eq!(route.title, "N-Judah");
        assert_eq!(route.color, "003399");
        assert_eq!(route.opposite_color, "ffffff");
        assert!((route.lat_min - 37.760_169_9).abs() < 1e-9);
        assert!((route.lat_max - 37.793_229_9).abs() < 1e-9);
        assert!((route.lon_min + 122.5092).abs() < 1e-9);
        assert!((route.lon_max + 122.387_98).abs() < 1e-9);

        assert_eq!(route.stops.len(), 2);
        assert_eq!(route.stops[0].title, "King St & 4th St");
        assert_eq!(route.stops[0].stop_id.as_deref(), Some("15240"));
        assert!(route.stops[1].stop_id.is_none());
        assert!((route.stops[1].lat - 37.76568).abs() < 1e-9);

        assert_eq!(route.directions.len(), 2);
        assert_eq!(route.directions[0].name, "Outbound");
        assert!(route.directions[0].use_for_ui);
        assert!(!route.directions[1].use_for_ui);
        assert_eq!(
            route.directions[0]
                .stops
                .iter()
                .map(|s| s.tag.as_str())
                .collect::<Vec<_>>(),
            vec!["5240", "3909"]
        );

        assert_eq!(route.paths.len(), 1);
        assert_eq!(route.paths[0].points.len(), 2);
    }

    #[test]
    fn test_decode_predictions() {
        let xml = r#"<body copyright="x">
              <predictions agencyTitle="San Francisco Muni" routeTitle="N-Judah" routeTag="N"
                           stopTitle="Carl St &amp; Cole St" stopTag="3909">
                <direction title="Outbound to Ocean Beach">
                  <prediction epochTime="1700000460000" seconds="462" minutes="7" isDeparture="false"
                              dirTag="N____O_F00" vehicle="2041" vehiclesInConsist="2" block="9709"
                              tripTag="11386720" affectedByLayover="true"/>
                  <prediction epochTime="1700001000000" seconds="1002" minutes="16" isDeparture="false"
                              dirTag="N____O_F00" vehicle="2077" block="9711" tripTag="11386721"/>
                </direction>
                <message text="Elevator at Church St out of service" priority="Normal"/>
              </predictions>
            </body>"#;

        let resp: PredictionsResponse = from_str(xml).unwrap();
        assert_eq!(resp.predictions.len(), 1);
        let bundle = &resp.predictions[0];
        assert_eq!(bundle.agency_title, "San Francisco Muni");
        assert_eq!(bundle.route_title, "N-Judah");
        assert_eq!(bundle.route_tag, "N");
        assert_eq!(bundle.stop_title, "Carl St & Cole St");
        assert_eq!(bundle.stop_tag, "3909");
        assert!(bundle.dir_title_because_no_predictions.is_none());

        let direction = &bundle.directions[0];
        assert_eq!(direction.title, "Outbound to Ocean Beach");
        assert_eq!(
            direction.predictions[0],
            FeedPrediction {
                epoch_time: 1_700_000_460_000,
                seconds: 462,
                minutes: 7,
                is_departure: false,
                dir_tag: "N____O_F00".to_string(),
                vehicle: "2041".to_string(),
                vehicles_in_consist: Some(2),
                block: "9709".to_string(),
                trip_tag: "11386720".to_string(),
                affected_by_layover: true,
            }
        );
        assert!(direction.predictions[1].vehicles_in_consist.is_none());
        assert!(!direction.predictions[1].affected_by_layover);

        assert_eq!(bundle.messages.len(), 1);
        assert_eq!(bundle.messages[0].priority, "Normal");
    }

    #[test]
    fn test_decode_predictions_without_any() {
        let xml = r#"<body copyright="x">
              <predictions agencyTitle="San Francisco Muni" routeTitle="N-Judah" routeTag="N"
                           stopTitle="Carl St &amp; Cole St" stopTag="3909"
                           dirTitleBecauseNoPredictions="Outbound to Ocean Beach"/>
            </body>"#;

        let resp: PredictionsResponse = from_str(xml).unwrap();
        let bundle = &resp.predictions[0];
        assert!(bundle.directions.is_empty());
        assert_eq!(
            bundle.dir_title_because_no_predictions.as_deref(),
            Some("Outbound to Ocean Beach")
        );
    }

    #[test]
    fn test_decode_predictions_for_every_route_at_stop() {
        let xml = r#"<body copyright="x">
              <predictions agencyTitle="San Francisco Muni" routeTitle="N-Judah" routeTag="N"
                           stopTitle="Carl St &amp; Cole St" stopTag="3909">
                <direction title="Outbound to Ocean Beach">
                  <prediction epochTime="1700000460000" seconds="462" minutes="7" isDeparture="false"
                              dirTag="N____O_F00" vehicle="2041" block="9709" tripTag="11386720"/>
                </direction>
              </predictions>
              <predictions agencyTitle="San Francisco Muni" routeTitle="N-Owl" routeTag="N_OWL"
                           stopTitle="Carl St &amp; Cole St" stopTag="3909"
                           dirTitleBecauseNoPredictions="Outbound to Ocean Beach"/>
            </body>"#;

        let resp: PredictionsResponse = from_str(xml).unwrap();
        let routes: Vec<_> = resp.predictions.iter().map(|p| p.route_tag.as_str()).collect();
        assert_eq!(routes, vec!["N", "N_OWL"]);
        assert_eq!(resp.predictions[0].directions[0].predictions[0].minutes, 7);
        assert!(resp.predictions[1].directions.is_empty());
        assert!(resp.error_if_any().is_none());
    }

    #[test]
    fn test_error_element_takes_precedence() {
        let xml = r#"<body copyright="x">
              <Error shouldRetry="false">
                Agency parameter "a=nope" is not valid.
              </Error>
              <route tag="N" title="N-Judah"/>
            </body>"#;

        let resp: RouteListResponse = from_str(xml).unwrap();
        let Some(NextBusError::Feed {
            message,
            should_retry,
        }) = resp.error_if_any()
        else {
            unreachable!("expected a feed error");
        };
        assert_eq!(message, "Agency parameter \"a=nope\" is not valid.");
        assert!(!should_retry);
    }

    #[test]
    fn test_error_retry_advisory() {
        let xml = r#"<body copyright="x"><Error shouldRetry="true">
feed is busy
</Error></body>"#;

        let resp: PredictionsResponse = from_str(xml).unwrap();
        let err = resp.error_if_any().unwrap();
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "feed is busy");
    }
}
