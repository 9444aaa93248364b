//! `agencies` - list every agency published by the feed

use domain::{Agency, DirectMessage, UserId};
use tracing::warn;

use super::{CommandResponse, CommandRouter};

const NO_AGENCIES_REPLY: &str = "No agencies found. Maybe an issue in the NextBus API";

impl CommandRouter {
    pub(super) async fn handle_agencies(&self, user: &UserId) -> CommandResponse {
        let agencies = match self.feed.list_agencies().await {
            Ok(agencies) => agencies,
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Failed to list agencies");
                return CommandResponse::Ephemeral(format!("failed to list nextBus agencies... {e}"));
            },
        };

        if agencies.is_empty() {
            warn!("Feed returned no agencies");
            return CommandResponse::Ephemeral(NO_AGENCIES_REPLY.to_string());
        }

        let message = DirectMessage::text(self.bot.user_id.clone(), format_agencies(&agencies));
        self.deliver(user, message, "Agencies").await
    }
}

/// One line per agency, in feed order
fn format_agencies(agencies: &[Agency]) -> String {
    agencies
        .iter()
        .map(|a| format!("{} - Region: {} Tag: {}", a.title, a.region_title, a.tag))
        .collect::<Vec<_>>()
        .join("\n")
}
