//! Long-polling update source: teloxide's dispatcher feeds Telegram events
//! in, this module reduces them to [`dispatch::Update`] values.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, UpdateKind};
use tracing::{info, warn};

use crate::dispatch::{self, AppState};

/// Run the bot in polling mode until ctrl-c.
pub async fn run(bot: Bot, state: Arc<AppState>) -> Result<()> {
    // A webhook left over from a previous run blocks polling.
    bot.delete_webhook().await.ok();

    info!("Starting in polling mode...");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("bot"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(update) = command_update(&msg) {
        dispatch::dispatch(&state, update).await;
    }
    Ok(())
}

async fn on_callback(bot: Bot, q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    // Ack first so the client stops the button spinner.
    bot.answer_callback_query(q.id.clone()).await.ok();
    if let Some(update) = button_update(&q) {
        dispatch::dispatch(&state, update).await;
    }
    Ok(())
}

/// Reduce a text message to a dispatchable update. Non-text messages carry
/// nothing to route on.
pub(crate) fn command_update(msg: &Message) -> Option<dispatch::Update> {
    let text = msg.text()?;
    Some(dispatch::Update::CommandMessage {
        chat_id: msg.chat.id,
        command_text: text.to_string(),
    })
}

/// Reduce a button press to a dispatchable update. Presses without data or
/// without a reachable origin chat are ignored.
pub(crate) fn button_update(q: &CallbackQuery) -> Option<dispatch::Update> {
    let token = q.data.as_deref()?;
    let chat_id = q.message.as_ref().map(|m| m.chat().id)?;
    Some(dispatch::Update::ButtonPress {
        chat_id,
        callback_token: token.to_string(),
    })
}

/// Reduce a full Telegram update (webhook payloads) to a dispatchable one.
pub(crate) fn from_telegram(update: teloxide::types::Update) -> Option<dispatch::Update> {
    match update.kind {
        UpdateKind::Message(msg) => command_update(&msg),
        UpdateKind::CallbackQuery(q) => button_update(&q),
        _ => None,
    }
}
