/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a Telegram message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// The sender of an inbound event, as reported by the platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: Option<String>,
    pub first_name: String,
}

impl User {
    /// Handle if the user has one, otherwise their first name.
    pub fn display_name(&self) -> &str {
        match self.username.as_deref() {
            Some(handle) if !handle.is_empty() => handle,
            _ => &self.first_name,
        }
    }

    /// The private chat between the bot and this user.
    pub fn private_chat(&self) -> ChatId {
        ChatId(self.id.0)
    }
}
