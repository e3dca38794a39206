mod bot;
mod config;
mod content;
mod dispatch;
mod handlers;
mod outbox;
mod server;

use std::sync::Arc;

use anyhow::Result;
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::dispatch::AppState;
use crate::outbox::TelegramOutbox;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,devmentor_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing BOT_TOKEN is fatal before anything is served.
    let config = Config::from_env()?;
    let bot = Bot::new(&config.bot_token);
    let state = Arc::new(AppState::new(Arc::new(TelegramOutbox::new(bot.clone()))));

    info!("Bot is starting...");

    match config.webhook_url.clone() {
        Some(url) => server::run(bot, state, url, config.port).await?,
        None => bot::run(bot, state).await?,
    }

    Ok(())
}
