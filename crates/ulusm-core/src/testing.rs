//! Test doubles shared by the core unit tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex,
};
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageId, MessageRef, User, UserId},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{InviteLink, InviteLinkRequest, Poll},
    },
    Result,
};

pub fn user(id: i64, name: &str) -> User {
    User {
        id: UserId(id),
        username: None,
        first_name: name.to_string(),
    }
}

#[derive(Default)]
pub struct FakeMessenger {
    next_id: Mutex<i32>,
    texts: Mutex<Vec<(ChatId, String)>>,
    polls: Mutex<Vec<(ChatId, Poll)>>,
    invite_calls: Mutex<Vec<(ChatId, InviteLinkRequest)>>,
    link_counter: AtomicUsize,
    fail_invites: AtomicBool,
    fail_polls: AtomicBool,
    invite_delay: Mutex<Option<Duration>>,
}

impl FakeMessenger {
    fn alloc(&self, chat_id: ChatId) -> MessageRef {
        let mut guard = self.next_id.lock().unwrap();
        *guard += 1;
        MessageRef {
            chat_id,
            message_id: MessageId(*guard),
        }
    }

    pub fn fail_invites(&self, fail: bool) {
        self.fail_invites.store(fail, Ordering::SeqCst);
    }

    pub fn fail_polls(&self, fail: bool) {
        self.fail_polls.store(fail, Ordering::SeqCst);
    }

    /// Make link creation slow so concurrent callers overlap.
    pub fn delay_invites(&self, d: Duration) {
        *self.invite_delay.lock().unwrap() = Some(d);
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, t)| t.clone())
            .collect()
    }

    pub fn texts_to(&self, chat_id: ChatId) -> Vec<String> {
        self.texts
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == chat_id)
            .map(|(_, t)| t.clone())
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts.lock().unwrap().last().map(|(_, t)| t.clone())
    }

    pub fn polls(&self) -> Vec<(ChatId, Poll)> {
        self.polls.lock().unwrap().clone()
    }

    pub fn invite_calls(&self) -> Vec<(ChatId, InviteLinkRequest)> {
        self.invite_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagingPort for FakeMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageRef> {
        self.texts.lock().unwrap().push((chat_id, text.to_string()));
        Ok(self.alloc(chat_id))
    }

    async fn send_poll(&self, chat_id: ChatId, poll: &Poll) -> Result<MessageRef> {
        if self.fail_polls.load(Ordering::SeqCst) {
            return Err(Error::External("telegram error: poll rejected".to_string()));
        }
        self.polls.lock().unwrap().push((chat_id, poll.clone()));
        Ok(self.alloc(chat_id))
    }

    async fn create_invite_link(
        &self,
        group_id: ChatId,
        request: InviteLinkRequest,
    ) -> Result<InviteLink> {
        self.invite_calls.lock().unwrap().push((group_id, request));
        let delay = *self.invite_delay.lock().unwrap();
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
        if self.fail_invites.load(Ordering::SeqCst) {
            return Err(Error::External(
                "telegram error: not enough rights to manage chat invite link".to_string(),
            ));
        }
        let n = self.link_counter.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(InviteLink {
            url: format!("https://t.me/+invite{n}"),
        })
    }
}
