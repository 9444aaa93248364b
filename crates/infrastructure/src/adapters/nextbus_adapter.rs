//! NextBus adapter - Implements TransitFeedPort using integration_nextbus

use std::{fmt, sync::Arc};

use application::{error::ApplicationError, ports::TransitFeedPort};
use async_trait::async_trait;
use domain::{Agency, Route, RouteConfig, StopPredictions};
use integration_nextbus::{
    HttpNextBusClient, NextBusClient, NextBusConfig, NextBusError, models::FeedPredictions,
};
use tracing::{debug, instrument, warn};

/// Adapter exposing the NextBus feed as a [`TransitFeedPort`]
pub struct NextBusAdapter {
    client: Arc<dyn NextBusClient>,
}

impl fmt::Debug for NextBusAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NextBusAdapter").finish_non_exhaustive()
    }
}

impl NextBusAdapter {
    /// Create an adapter around an existing client
    pub fn new(client: Arc<dyn NextBusClient>) -> Self {
        Self { client }
    }

    /// Create an adapter with an HTTP client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn from_config(config: &NextBusConfig) -> Result<Self, ApplicationError> {
        config.validate().map_err(ApplicationError::Configuration)?;
        let client = HttpNextBusClient::new(config).map_err(map_error)?;
        Ok(Self::new(Arc::new(client)))
    }
}

/// Map a client error onto the application taxonomy
fn map_error(e: NextBusError) -> ApplicationError {
    match e {
        NextBusError::NotImplemented(command) => {
            ApplicationError::NotImplemented(command.to_string())
        },
        NextBusError::Feed { message, .. } => ApplicationError::TransitFeed(message),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

/// Pick the bundle of `route_tag`, falling back to the first one
fn select_route(bundles: Vec<FeedPredictions>, route_tag: &str) -> Option<FeedPredictions> {
    if bundles.len() > 1 {
        warn!(count = bundles.len(), route_tag, "Several prediction bundles for one route");
    }
    let index = bundles
        .iter()
        .position(|b| b.route_tag == route_tag)
        .unwrap_or(0);
    bundles.into_iter().nth(index)
}

#[async_trait]
impl TransitFeedPort for NextBusAdapter {
    #[instrument(skip(self))]
    async fn list_agencies(&self) -> Result<Vec<Agency>, ApplicationError> {
        let response = self.client.list_agencies().await.map_err(map_error)?;
        Ok(response.agencies.into_iter().map(Agency::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_routes(&self, agency_tag: &str) -> Result<Vec<Route>, ApplicationError> {
        let response = self
            .client
            .list_routes(agency_tag)
            .await
            .map_err(map_error)?;
        Ok(response.routes.into_iter().map(Route::from).collect())
    }

    #[instrument(skip(self))]
    async fn route_config(
        &self,
        agency_tag: &str,
        route_tag: &str,
    ) -> Result<Option<RouteConfig>, ApplicationError> {
        let response = self
            .client
            .route_config(agency_tag, route_tag)
            .await
            .map_err(map_error)?;

        let config = response.route.map(RouteConfig::from);
        if config.is_none() {
            warn!("Route config response without a route");
        }
        Ok(config)
    }

    #[instrument(skip(self))]
    async fn predictions(
        &self,
        agency_tag: &str,
        route_tag: &str,
        stop_tag: &str,
    ) -> Result<Option<StopPredictions>, ApplicationError> {
        let response = self
            .client
            .predictions_by_stop_tag(agency_tag, route_tag, stop_tag)
            .await
            .map_err(map_error)?;

        let bundle = select_route(response.predictions, route_tag).map(StopPredictions::from);
        if let Some(ref b) = bundle {
            debug!(count = b.prediction_count(), "Predictions received");
        }
        Ok(bundle)
    }

    #[instrument(skip(self))]
    async fn predictions_by_stop_id(
        &self,
        agency_tag: &str,
        stop_id: &str,
    ) -> Result<Vec<StopPredictions>, ApplicationError> {
        let response = self
            .client
            .predictions_by_stop_id(agency_tag, stop_id)
            .await
            .map_err(map_error)?;
        debug!(routes = response.predictions.len(), "Stop predictions received");
        Ok(response
            .predictions
            .into_iter()
            .map(StopPredictions::from)
            .collect())
    }
}
