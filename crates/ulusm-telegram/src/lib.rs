//! Telegram adapter (teloxide).
//!
//! This crate implements the `ulusm-core` MessagingPort over Telegram Bot API
//! and feeds Telegram updates into the core dispatcher.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use teloxide::prelude::*;

use tokio::time::sleep;

pub mod handlers;
pub mod router;

use ulusm_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{InviteLink, InviteLinkRequest, Poll},
    },
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    /// Retries once on a 429 flood-wait. Not used for invite links.
    async fn with_retry<T, Fut>(&self, mut op: impl FnMut() -> Fut) -> Result<T>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, teloxide::RequestError>>,
        Fut::IntoFuture: Send,
    {
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(e) => match e {
                    teloxide::RequestError::RetryAfter(d) if attempts < MAX_RETRIES => {
                        attempts += 1;
                        tracing::warn!(wait = ?d, "telegram flood control, retrying once");
                        sleep(d).await;
                        continue;
                    }
                    other => return Err(Self::map_err(other)),
                },
            }
        }
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef> {
        let msg = self
            .with_retry(|| {
                self.bot
                    .send_message(Self::tg_chat(chat_id), text.to_string())
            })
            .await?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn send_poll(&self, chat_id: ChatId, poll: &Poll) -> Result<MessageRef> {
        let msg = self
            .with_retry(|| {
                self.bot
                    .send_poll(
                        Self::tg_chat(chat_id),
                        poll.question.clone(),
                        poll.options.clone(),
                    )
                    .is_anonymous(poll.is_anonymous)
            })
            .await?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn create_invite_link(
        &self,
        group_id: ChatId,
        request: InviteLinkRequest,
    ) -> Result<InviteLink> {
        let mut req = self.bot.create_chat_invite_link(Self::tg_chat(group_id));
        if let Some(limit) = request.member_limit {
            req = req.member_limit(limit);
        }
        if let Some(after) = request.expire_after {
            req = req.expire_date(expire_at(after, Utc::now())?);
        }

        let link = req.await.map_err(Self::map_err)?;
        Ok(InviteLink {
            url: link.invite_link,
        })
    }
}

/// Absolute expiry for a link created at `now` that stays valid for `after`.
fn expire_at(after: Duration, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    chrono::Duration::from_std(after)
        .ok()
        .and_then(|d| now.checked_add_signed(d))
        .ok_or_else(|| Error::External(format!("invite expiry out of range: {after:?}")))
}
