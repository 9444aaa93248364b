//! NextBus feed client
//!
//! Every operation is a single HTTP GET against the public XML feed, selected
//! by the `command` query parameter.

use std::convert::Infallible;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::NextBusConfig;
use crate::error::NextBusError;
use crate::models::{
    AgencyListResponse, FeedResponse, PredictionsResponse, RouteConfigResponse, RouteListResponse,
};

/// Trait for NextBus feed clients
#[async_trait]
pub trait NextBusClient: Send + Sync {
    /// List every agency served by the feed
    async fn list_agencies(&self) -> Result<AgencyListResponse, NextBusError>;

    /// List the routes of an agency
    async fn list_routes(&self, agency_tag: &str) -> Result<RouteListResponse, NextBusError>;

    /// Fetch stops, directions and paths of a route
    async fn route_config(
        &self,
        agency_tag: &str,
        route_tag: &str,
    ) -> Result<RouteConfigResponse, NextBusError>;

    /// Arrival predictions for a stop identified by its route-scoped tag
    async fn predictions_by_stop_tag(
        &self,
        agency_tag: &str,
        route_tag: &str,
        stop_tag: &str,
    ) -> Result<PredictionsResponse, NextBusError>;

    /// Arrival predictions for a stop identified by its public stop number
    async fn predictions_by_stop_id(
        &self,
        agency_tag: &str,
        stop_id: &str,
    ) -> Result<PredictionsResponse, NextBusError>;

    /// Timetable of a route. Not supported.
    async fn schedule(&self, _agency_tag: &str, _route_tag: &str) -> Result<Infallible, NextBusError> {
        Err(NextBusError::NotImplemented("schedule"))
    }

    /// Service messages of a set of routes. Not supported.
    async fn messages(
        &self,
        _agency_tag: &str,
        _route_tags: &[String],
    ) -> Result<Infallible, NextBusError> {
        Err(NextBusError::NotImplemented("messages"))
    }

    /// Vehicle positions reported since `last_time`. Not supported.
    async fn vehicle_locations(
        &self,
        _agency_tag: &str,
        _route_tag: &str,
        _last_time: u64,
    ) -> Result<Infallible, NextBusError> {
        Err(NextBusError::NotImplemented("vehicleLocations"))
    }
}

/// NextBus client over HTTP
#[derive(Debug)]
pub struct HttpNextBusClient {
    client: Client,
    config: NextBusConfig,
}

impl HttpNextBusClient {
    /// Create a new NextBus client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NextBusConfig) -> Result<Self, NextBusError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| NextBusError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Issue one feed command and decode its response
    ///
    /// Parameters with an empty value are left out of the query string.
    async fn command<T>(&self, command: &str, params: &[(&str, &str)]) -> Result<T, NextBusError>
    where
        T: FeedResponse + DeserializeOwned + Send,
    {
        let mut query = Vec::with_capacity(params.len() + 1);
        query.push(("command", command));
        query.extend(params.iter().copied().filter(|(_, value)| !value.is_empty()));

        let request = self
            .client
            .get(&self.config.base_url)
            .query(&query)
            .build()
            .map_err(|e| NextBusError::InvalidRequest(e.to_string()))?;

        debug!(url = %request.url(), "Querying NextBus feed");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, command, "NextBus feed returned an error status");
            return Err(NextBusError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| NextBusError::ParseError(e.to_string()))?;

        Self::parse_response(&body).inspect_err(|e| {
            warn!(command, error = %e, "NextBus command failed");
        })
    }

    /// Decode a response body and surface an embedded feed error
    fn parse_response<T>(body: &str) -> Result<T, NextBusError>
    where
        T: FeedResponse + DeserializeOwned,
    {
        let parsed: T =
            quick_xml::de::from_str(body).map_err(|e| NextBusError::ParseError(e.to_string()))?;

        match parsed.error_if_any() {
            Some(err) => Err(err),
            None => Ok(parsed),
        }
    }

    fn transport_error(&self, e: &reqwest::Error) -> NextBusError {
        if e.is_timeout() {
            NextBusError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            NextBusError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl NextBusClient for HttpNextBusClient {
    #[instrument(skip(self))]
    async fn list_agencies(&self) -> Result<AgencyListResponse, NextBusError> {
        let response: AgencyListResponse = self.command("agencyList", &[]).await?;
        debug!(count = response.agencies.len(), "Agencies listed");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn list_routes(&self, agency_tag: &str) -> Result<RouteListResponse, NextBusError> {
        let response: RouteListResponse = self.command("routeList", &[("a", agency_tag)]).await?;
        debug!(count = response.routes.len(), "Routes listed");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn route_config(
        &self,
        agency_tag: &str,
        route_tag: &str,
    ) -> Result<RouteConfigResponse, NextBusError> {
        self.command("routeConfig", &[("a", agency_tag), ("r", route_tag)])
            .await
    }

    #[instrument(skip(self))]
    async fn predictions_by_stop_tag(
        &self,
        agency_tag: &str,
        route_tag: &str,
        stop_tag: &str,
    ) -> Result<PredictionsResponse, NextBusError> {
        self.command(
            "predictions",
            &[("a", agency_tag), ("r", route_tag), ("s", stop_tag)],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn predictions_by_stop_id(
        &self,
        agency_tag: &str,
        stop_id: &str,
    ) -> Result<PredictionsResponse, NextBusError> {
        self.command("predictions", &[("a", agency_tag), ("stopId", stop_id)])
            .await
    }
}
