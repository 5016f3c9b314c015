//! Telegram update handlers.
//!
//! Each handler only translates a Telegram update into an `InboundEvent` and
//! hands it to the core dispatcher; all decisions live in `ulusm-core`.

use std::sync::Arc;

use teloxide::{prelude::*, types::PollAnswer};

use ulusm_core::{
    domain::{self, UserId},
    messaging::types::InboundEvent,
};

use crate::router::AppState;

mod commands;

fn to_core_user(user: &teloxide::types::User) -> domain::User {
    domain::User {
        id: UserId(user.id.0 as i64),
        username: user.username.clone(),
        first_name: user.first_name.clone(),
    }
}

/// Build the core event for a text message. Non-text messages and messages
/// without a sender are not part of the flow.
pub(crate) fn message_event(msg: &Message) -> Option<InboundEvent> {
    let user = to_core_user(msg.from()?);
    let text = msg.text()?;
    let chat_id = domain::ChatId(msg.chat.id.0);

    // Unregistered slash-commands fall through to the plain-text path.
    let event = match commands::recognize(text) {
        Some(command) => InboundEvent::Command {
            chat_id,
            user,
            command,
        },
        None => InboundEvent::FreeText {
            chat_id,
            user,
            text: text.to_string(),
        },
    };
    Some(event)
}

pub(crate) fn poll_answer_event(answer: &PollAnswer) -> InboundEvent {
    InboundEvent::PollAnswer {
        user: to_core_user(&answer.user),
        option_ids: answer.option_ids.iter().map(|&i| i as usize).collect(),
    }
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(event) = message_event(&msg) else {
        tracing::debug!(chat_id = msg.chat.id.0, "ignoring non-text message");
        return Ok(());
    };
    state.dispatcher.handle(event).await;
    Ok(())
}

pub async fn handle_poll_answer(answer: PollAnswer, state: Arc<AppState>) -> ResponseResult<()> {
    state.dispatcher.handle(poll_answer_event(&answer)).await;
    Ok(())
}
