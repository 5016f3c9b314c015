use std::time::Duration;

use crate::domain::{ChatId, User};

/// Platform-neutral inbound update.
///
/// Telegram-specific fields stay in the Telegram adapter.
#[derive(Clone, Debug)]
pub enum InboundEvent {
    Command {
        chat_id: ChatId,
        user: User,
        command: Command,
    },
    FreeText {
        chat_id: ChatId,
        user: User,
        text: String,
    },
    PollAnswer {
        user: User,
        /// Indices of the selected options; empty when the vote was retracted.
        option_ids: Vec<usize>,
    },
}

impl InboundEvent {
    pub fn user(&self) -> &User {
        match self {
            Self::Command { user, .. }
            | Self::FreeText { user, .. }
            | Self::PollAnswer { user, .. } => user,
        }
    }
}

/// Commands the bot registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Content,
    Contact,
    Gateways,
    Rules,
    JoinGroup,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Start,
        Command::Help,
        Command::Content,
        Command::Contact,
        Command::Gateways,
        Command::Rules,
        Command::JoinGroup,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Content => "content",
            Command::Contact => "contact",
            Command::Gateways => "gateways",
            Command::Rules => "rules",
            Command::JoinGroup => "join_group",
        }
    }

    /// Parse a bare command name (no leading slash, no `@botname`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// Outgoing poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poll {
    pub question: String,
    pub options: Vec<String>,
    pub is_anonymous: bool,
}

/// Parameters for a group invite link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InviteLinkRequest {
    /// Maximum number of joins; `None` means unlimited.
    pub member_limit: Option<u32>,
    /// How long the link stays usable after creation; `None` means forever.
    pub expire_after: Option<Duration>,
}

impl InviteLinkRequest {
    /// One join, expiring after `expire_after` if given.
    pub fn single_use(expire_after: Option<Duration>) -> Self {
        Self {
            member_limit: Some(1),
            expire_after,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InviteLink {
    pub url: String,
}
