use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use ulusm_core::{
    catalog::{CountryCatalog, JsonFileCountrySource},
    config::Config,
    dispatcher::Dispatcher as BotDispatcher,
    invites::{GroupTarget, InviteGate},
    messaging::port::MessagingPort,
    state::ConversationStore,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<BotDispatcher>,
}

/// Wire the core services onto a Telegram bot and long-poll until shutdown.
pub async fn run_polling(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    match bot.get_me().await {
        Ok(me) => tracing::info!(username = %me.username(), "bot started"),
        Err(e) => tracing::warn!(error = %e, "could not fetch bot identity"),
    }
    tracing::info!(
        group_id = cfg.group_id.0,
        countries_file = %cfg.countries_file.display(),
        invite_expiry = ?cfg.invite_expiry,
        "gating invites"
    );

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let catalog = CountryCatalog::new(Arc::new(JsonFileCountrySource::new(
        cfg.countries_file.clone(),
    )));
    let invites = Arc::new(InviteGate::new(
        messenger.clone(),
        GroupTarget {
            id: cfg.group_id,
            name: cfg.group_name.clone(),
            link_expiry: cfg.invite_expiry,
        },
    ));
    let dispatcher = Arc::new(BotDispatcher::new(
        messenger,
        catalog,
        Arc::new(ConversationStore::new()),
        invites,
    ));

    let state = Arc::new(AppState { dispatcher });

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(handlers::handle_message))
        .branch(Update::filter_poll_answer().endpoint(handlers::handle_poll_answer));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
