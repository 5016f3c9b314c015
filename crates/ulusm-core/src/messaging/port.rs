use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::{InviteLink, InviteLinkRequest, Poll},
    Result,
};

/// Outbound capabilities the bot core needs from a messaging platform.
///
/// Telegram is the only implementation; the core never talks to the platform directly.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef>;

    async fn send_poll(&self, chat_id: ChatId, poll: &Poll) -> Result<MessageRef>;

    /// Single network call; implementations must not retry on their own.
    async fn create_invite_link(
        &self,
        group_id: ChatId,
        request: InviteLinkRequest,
    ) -> Result<InviteLink>;
}
