//! `stops <agency> <route>` - list the stops of one route

use domain::{DirectMessage, MessageField, RouteConfig, UserId};
use tracing::warn;

use super::{CommandResponse, CommandRouter};

const NO_ROUTE_CONFIG_REPLY: &str = "No route config found. Maybe an issue in the NextBus API";

impl CommandRouter {
    pub(super) async fn handle_stops(
        &self,
        user: &UserId,
        agency: &str,
        route: &str,
    ) -> CommandResponse {
        let config = match self.feed.route_config(agency, route).await {
            Ok(Some(config)) if !config.is_empty() => config,
            Ok(_) => {
                warn!(agency, route, "Feed returned no route config");
                return CommandResponse::Ephemeral(NO_ROUTE_CONFIG_REPLY.to_string());
            },
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), agency, route, "Failed to fetch route config");
                return CommandResponse::Ephemeral(format!(
                    "failed to list nextBus routes config... {e}"
                ));
            },
        };

        let message = stops_message(&self.bot.user_id, &config);
        self.deliver(user, message, "route config").await
    }
}

fn stops_message(sender: &UserId, config: &RouteConfig) -> DirectMessage {
    let stops = config
        .stops
        .iter()
        .map(|stop| format!("{} - {}", stop.title, stop.tag))
        .collect::<Vec<_>>()
        .join("\n");

    DirectMessage::structured(
        sender.clone(),
        format!("Stops for route {}", config.title),
        vec![MessageField::long("Stops", stops)],
    )
}
