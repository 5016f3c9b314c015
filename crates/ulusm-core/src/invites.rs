use std::{collections::HashSet, sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    domain::{ChatId, User, UserId},
    locks::UserLocks,
    messaging::{port::MessagingPort, types::InviteLinkRequest},
    replies,
};

/// Poll option index meaning "Yes". Every other index is treated as a decline.
pub const YES_OPTION: usize = 0;

/// The private group invites are issued for.
#[derive(Clone, Debug)]
pub struct GroupTarget {
    pub id: ChatId,
    pub name: String,
    /// Lifetime of each issued link; `None` keeps links valid until used.
    pub link_expiry: Option<Duration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InviteOutcome {
    AlreadyInvited,
    Declined,
    Issued { link: String },
    Failed,
}

/// Issues at most one single-use invite link per user, ever.
pub struct InviteGate {
    messenger: Arc<dyn MessagingPort>,
    group: GroupTarget,
    invited: Mutex<HashSet<UserId>>,
    locks: UserLocks,
}

impl InviteGate {
    pub fn new(messenger: Arc<dyn MessagingPort>, group: GroupTarget) -> Self {
        Self {
            messenger,
            group,
            invited: Mutex::new(HashSet::new()),
            locks: UserLocks::default(),
        }
    }

    pub async fn is_invited(&self, user: UserId) -> bool {
        self.invited.lock().await.contains(&user)
    }

    /// React to a poll answer from `user`.
    ///
    /// The whole check → create → record sequence runs under the user's lock, so
    /// duplicate answers delivered concurrently create at most one link.
    pub async fn handle_poll_response(&self, user: &User, selected_option: usize) -> InviteOutcome {
        let _guard = self.locks.lock_user(user.id).await;
        let name = user.display_name();
        let chat = user.private_chat();

        if self.is_invited(user.id).await {
            tracing::info!(user_id = user.id.0, "duplicate invite request ignored");
            self.notify(chat, &replies::already_invited(name)).await;
            return InviteOutcome::AlreadyInvited;
        }

        if selected_option != YES_OPTION {
            tracing::info!(user_id = user.id.0, selected_option, "user declined invite");
            self.notify(chat, &replies::declined(name)).await;
            return InviteOutcome::Declined;
        }

        self.notify(chat, &replies::processing(name)).await;

        match self
            .messenger
            .create_invite_link(
                self.group.id,
                InviteLinkRequest::single_use(self.group.link_expiry),
            )
            .await
        {
            Ok(link) => {
                self.invited.lock().await.insert(user.id);
                tracing::info!(user_id = user.id.0, "invite link issued");

                let teaser = replies::group_teaser(&self.group.name);
                self.notify(chat, &replies::invited(name, teaser, &link.url))
                    .await;
                InviteOutcome::Issued { link: link.url }
            }
            Err(e) => {
                tracing::error!(user_id = user.id.0, error = %e, "failed to create invite link");
                self.notify(chat, &replies::invite_failed(name)).await;
                InviteOutcome::Failed
            }
        }
    }

    async fn notify(&self, chat: ChatId, text: &str) {
        if let Err(e) = self.messenger.send_text(chat, text).await {
            tracing::warn!(chat_id = chat.0, error = %e, "failed to send message");
        }
    }
}
