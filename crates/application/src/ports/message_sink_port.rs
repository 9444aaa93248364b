//! Message sink port - Delivery of bot replies to chat users

use async_trait::async_trait;
use domain::{DirectMessage, Post, UserId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for posting messages on the hosting chat platform
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageSinkPort: Send + Sync {
    /// Post a message in the direct channel between the bot and `recipient`
    ///
    /// Resolving (or creating) the direct channel is the adapter's concern.
    async fn post_direct_message(
        &self,
        recipient: &UserId,
        message: DirectMessage,
    ) -> Result<Post, ApplicationError>;

    /// Show a message only `recipient` can see
    async fn post_ephemeral(&self, recipient: &UserId, text: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn MessageSinkPort>();
    }
}
