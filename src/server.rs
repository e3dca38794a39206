//! Webhook update source: an axum server receiving pushed updates, plus the
//! health probe for process supervisors.
//!
//! `POST /webhook` acknowledges with `{"ok": true}` no matter what happens
//! to the payload — delivery back to Telegram is the dispatcher's problem,
//! not the webhook caller's.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use teloxide::prelude::*;
use teloxide::types::UpdateKind;
use tracing::{info, warn};
use url::Url;

use crate::bot;
use crate::dispatch::AppState;

#[derive(Clone)]
struct ServerContext {
    bot: Bot,
    state: Arc<AppState>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct Ack {
    ok: bool,
}

/// Register the webhook, serve until ctrl-c, then deregister it.
pub async fn run(bot: Bot, state: Arc<AppState>, webhook_url: Url, port: u16) -> Result<()> {
    bot.set_webhook(webhook_url.clone())
        .await
        .context("Failed to register webhook with Telegram")?;
    info!("Webhook registered at {webhook_url}");

    let ctx = ServerContext {
        bot: bot.clone(),
        state,
    };
    let app = Router::new()
        .route("/", get(health))
        .route("/webhook", post(webhook))
        .with_state(ctx);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await
        .context("Server error")?;

    // Mirror startup: leave no webhook behind once we stop serving it.
    bot.delete_webhook().await.ok();
    info!("Webhook deleted, shutting down");

    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Bot is running!",
    })
}

async fn webhook(State(ctx): State<ServerContext>, Json(payload): Json<Value>) -> Json<Ack> {
    match serde_json::from_value::<teloxide::types::Update>(payload) {
        Ok(update) => {
            if let UpdateKind::CallbackQuery(ref q) = update.kind {
                let bot = ctx.bot.clone();
                let callback_id = q.id.clone();
                tokio::spawn(async move {
                    bot.answer_callback_query(callback_id).await.ok();
                });
            }
            if let Some(update) = bot::from_telegram(update) {
                let state = ctx.state.clone();
                // Dispatch off the request path so the next update is never
                // blocked behind this one.
                tokio::spawn(async move {
                    crate::dispatch::dispatch(&state, update).await;
                });
            }
        }
        Err(e) => warn!("Ignoring malformed webhook payload: {e}"),
    }
    Json(Ack { ok: true })
}
