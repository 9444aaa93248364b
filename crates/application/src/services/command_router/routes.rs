//! `routes <agency>` - list the routes of one agency

use domain::{DirectMessage, MessageField, Route, UserId};
use tracing::warn;

use super::{CommandResponse, CommandRouter};

const NO_ROUTES_REPLY: &str = "No route found. Maybe an issue in the NextBus API";

impl CommandRouter {
    pub(super) async fn handle_routes(&self, user: &UserId, agency: &str) -> CommandResponse {
        let routes = match self.feed.list_routes(agency).await {
            Ok(routes) => routes,
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), agency, "Failed to list routes");
                return CommandResponse::Ephemeral(format!("failed to list nextBus routes... {e}"));
            },
        };

        if routes.is_empty() {
            warn!(agency, "Feed returned no routes");
            return CommandResponse::Ephemeral(NO_ROUTES_REPLY.to_string());
        }

        let message = routes_message(&self.bot.user_id, agency, &routes);
        self.deliver(user, message, "routes").await
    }
}

fn routes_message(sender: &UserId, agency: &str, routes: &[Route]) -> DirectMessage {
    let fields = routes
        .iter()
        .flat_map(|route| {
            [
                MessageField::short("Route", &route.title),
                MessageField::short("Tag", &route.tag),
            ]
        })
        .collect();

    DirectMessage::structured(sender.clone(), format!("Routes for Agency: {agency}"), fields)
}
