//! `prediction <agency> <route> <stop>` - next departures at a stop

use domain::{DirectMessage, MessageField, StopPredictions, UserId};
use tracing::warn;

use super::{CommandResponse, CommandRouter};

const NO_PREDICTION_REPLY: &str = "No prediction found for now.";

/// Departures listed per direction; later ones are dropped
const MAX_DEPARTURES_PER_DIRECTION: usize = 3;

impl CommandRouter {
    pub(super) async fn handle_prediction(
        &self,
        user: &UserId,
        agency: &str,
        route: &str,
        stop: &str,
    ) -> CommandResponse {
        let bundle = match self.feed.predictions(agency, route, stop).await {
            Ok(Some(bundle)) => bundle,
            Ok(None) => {
                warn!(agency, route, stop, "Feed returned no predictions");
                return CommandResponse::Ephemeral(NO_PREDICTION_REPLY.to_string());
            },
            Err(e) => {
                warn!(
                    error = %e,
                    retryable = e.is_retryable(),
                    agency,
                    route,
                    stop,
                    "Failed to fetch predictions"
                );
                return CommandResponse::Ephemeral(format!(
                    "failed to get nextBus predictions... {e}"
                ));
            },
        };

        let message = prediction_message(&self.bot.user_id, &bundle, agency, route, stop);
        self.deliver(user, message, "prediction").await
    }
}

/// Web map of the stop, as a markdown link
fn google_map_link(agency: &str, route: &str, stop: &str) -> String {
    format!("[NextBus Google Maps](https://www.nextbus.com/googleMap/?a={agency}&r={route}&s={stop})")
}

fn prediction_message(
    sender: &UserId,
    bundle: &StopPredictions,
    agency: &str,
    route: &str,
    stop: &str,
) -> DirectMessage {
    let mut fields = vec![
        MessageField::short("Route", &bundle.route_title),
        MessageField::short("Stop", &bundle.stop_title),
    ];

    let idle_direction = bundle
        .no_predictions_direction
        .as_ref()
        .filter(|_| bundle.directions.is_empty());
    if let Some(direction) = idle_direction {
        fields.push(MessageField::long("Direction", direction));
    }

    for direction in &bundle.directions {
        fields.push(MessageField::long("Direction", &direction.title));
        fields.extend(
            direction
                .predictions
                .iter()
                .take(MAX_DEPARTURES_PER_DIRECTION)
                .map(|p| {
                    MessageField::long(
                        "Next departure",
                        format!("{} minutes {} seconds", p.minutes, p.seconds),
                    )
                }),
        );
    }

    if let Some(notice) = &bundle.message {
        fields.push(MessageField::long("Message", &notice.text));
    }

    fields.push(MessageField::long("", google_map_link(agency, route, stop)));

    DirectMessage::structured(sender.clone(), &bundle.agency_title, fields)
}
