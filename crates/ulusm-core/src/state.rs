use std::collections::HashSet;

use tokio::sync::Mutex;

use crate::domain::UserId;

/// Where a user is in the start → join → country flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    NotStarted,
    Idle,
    AwaitingCountry,
}

/// Process-lifetime conversation bookkeeping, keyed by user id.
///
/// "Started" and the conversation phase live in separate maps: a user can be
/// awaiting a country only after starting, but nothing else couples the two.
#[derive(Debug, Default)]
pub struct ConversationStore {
    started: Mutex<HashSet<UserId>>,
    awaiting_country: Mutex<HashSet<UserId>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn mark_started(&self, user: UserId) {
        self.started.lock().await.insert(user);
    }

    pub async fn is_started(&self, user: UserId) -> bool {
        self.started.lock().await.contains(&user)
    }

    /// Re-entrant: calling it again while already awaiting just restarts the wait.
    pub async fn begin_country_wait(&self, user: UserId) {
        self.awaiting_country.lock().await.insert(user);
    }

    pub async fn is_awaiting_country(&self, user: UserId) -> bool {
        self.awaiting_country.lock().await.contains(&user)
    }

    pub async fn end_country_wait(&self, user: UserId) {
        self.awaiting_country.lock().await.remove(&user);
    }

    pub async fn state(&self, user: UserId) -> ConversationState {
        if self.is_awaiting_country(user).await {
            ConversationState::AwaitingCountry
        } else if self.is_started(user).await {
            ConversationState::Idle
        } else {
            ConversationState::NotStarted
        }
    }

    /// Atomically move `user` from `expected` to `next`.
    ///
    /// Returns false, leaving everything untouched, if the current state is not `expected`.
    /// `NotStarted` can be left but never re-entered.
    pub async fn compare_and_set(
        &self,
        user: UserId,
        expected: ConversationState,
        next: ConversationState,
    ) -> bool {
        let mut started = self.started.lock().await;
        let mut awaiting = self.awaiting_country.lock().await;

        let current = if awaiting.contains(&user) {
            ConversationState::AwaitingCountry
        } else if started.contains(&user) {
            ConversationState::Idle
        } else {
            ConversationState::NotStarted
        };
        if current != expected {
            return false;
        }

        match next {
            ConversationState::NotStarted => {
                if current != ConversationState::NotStarted {
                    return false;
                }
            }
            ConversationState::Idle => {
                started.insert(user);
                awaiting.remove(&user);
            }
            ConversationState::AwaitingCountry => {
                started.insert(user);
                awaiting.insert(user);
            }
        }
        true
    }
}
