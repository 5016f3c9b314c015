use std::sync::Arc;

use crate::{
    catalog::CountryCatalog,
    domain::{ChatId, User},
    eligibility::{classify, Eligibility},
    invites::InviteGate,
    locks::UserLocks,
    messaging::{
        port::MessagingPort,
        types::{Command, InboundEvent, Poll},
    },
    replies,
    state::ConversationStore,
};

/// Routes inbound events to the conversation flow and the invite gate.
pub struct Dispatcher {
    messenger: Arc<dyn MessagingPort>,
    catalog: CountryCatalog,
    store: Arc<ConversationStore>,
    invites: Arc<InviteGate>,
    locks: UserLocks,
}

impl Dispatcher {
    pub fn new(
        messenger: Arc<dyn MessagingPort>,
        catalog: CountryCatalog,
        store: Arc<ConversationStore>,
        invites: Arc<InviteGate>,
    ) -> Self {
        Self {
            messenger,
            catalog,
            store,
            invites,
            locks: UserLocks::default(),
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub async fn handle(&self, event: InboundEvent) {
        tracing::debug!(user_id = event.user().id.0, ?event, "inbound event");
        match event {
            InboundEvent::Command {
                chat_id,
                user,
                command,
            } => {
                let _guard = self.locks.lock_user(user.id).await;
                self.handle_command(chat_id, &user, command).await;
            }
            InboundEvent::FreeText {
                chat_id,
                user,
                text,
            } => {
                let _guard = self.locks.lock_user(user.id).await;
                self.handle_text(chat_id, &user, &text).await;
            }
            InboundEvent::PollAnswer { user, option_ids } => {
                // Poll answers are addressed by user id only, whatever the conversation state.
                let Some(&selected) = option_ids.first() else {
                    tracing::debug!(user_id = user.id.0, "poll vote retracted");
                    return;
                };
                self.invites.handle_poll_response(&user, selected).await;
            }
        }
    }

    async fn handle_command(&self, chat: ChatId, user: &User, command: Command) {
        let name = user.display_name();

        if command == Command::Start {
            self.store.mark_started(user.id).await;
            self.reply(chat, &replies::welcome(name)).await;
            return;
        }

        if !self.store.is_started(user.id).await {
            self.reply(chat, &replies::start_first()).await;
            return;
        }

        let text = match command {
            Command::Start => return,
            Command::Help => replies::help(name),
            Command::Content => replies::content(name),
            Command::Contact => replies::contact(name),
            Command::Gateways => replies::gateways(name),
            Command::Rules => replies::rules(name),
            Command::JoinGroup => {
                self.store.begin_country_wait(user.id).await;
                replies::ask_country(name)
            }
        };
        self.reply(chat, &text).await;
    }

    async fn handle_text(&self, chat: ChatId, user: &User, text: &str) {
        if self.store.is_awaiting_country(user.id).await {
            self.check_country(chat, user, text).await;
        } else {
            self.reply(chat, &replies::usage_hint(user.display_name()))
                .await;
        }
    }

    /// The wait is cleared only once the text is catalog-valid; anything else leaves
    /// the user awaiting so they can simply send another country.
    async fn check_country(&self, chat: ChatId, user: &User, country: &str) {
        let name = user.display_name();

        let valid = match self.catalog.validate(country) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(user_id = user.id.0, error = %e, "country catalog load failed");
                self.reply(chat, &replies::catalog_unavailable(name)).await;
                return;
            }
        };
        if !valid {
            self.reply(chat, &replies::invalid_country(country, name))
                .await;
            return;
        }

        match classify(country) {
            Eligibility::Ineligible => {
                tracing::info!(user_id = user.id.0, "country not eligible");
                self.reply(chat, &replies::ineligible(name)).await;
            }
            Eligibility::Eligible => {
                let poll = Poll {
                    question: replies::poll_question(name),
                    options: replies::POLL_OPTIONS.iter().map(|s| s.to_string()).collect(),
                    is_anonymous: false,
                };
                if let Err(e) = self.messenger.send_poll(chat, &poll).await {
                    tracing::error!(user_id = user.id.0, error = %e, "failed to send interest poll");
                    self.reply(chat, &replies::poll_unavailable(name)).await;
                    return;
                }
            }
        }

        self.store.end_country_wait(user.id).await;
    }

    async fn reply(&self, chat: ChatId, text: &str) {
        if let Err(e) = self.messenger.send_text(chat, text).await {
            tracing::warn!(chat_id = chat.0, error = %e, "failed to send reply");
        }
    }
}
