//! Runtime configuration, read once from the process environment.

use anyhow::{Context, Result};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot credential. Required.
    pub bot_token: String,
    /// Externally reachable base URL for webhook delivery. When unset the
    /// bot falls back to long polling.
    pub webhook_url: Option<Url>,
    /// Port for the webhook server.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bot_token =
            std::env::var("BOT_TOKEN").context("BOT_TOKEN not found in environment variables")?;
        let webhook_url = parse_webhook_url(std::env::var("WEBHOOK_URL").ok().as_deref())?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;

        Ok(Self {
            bot_token,
            webhook_url,
            port,
        })
    }
}

/// Empty or absent means polling mode; anything else must be a valid URL.
fn parse_webhook_url(raw: Option<&str>) -> Result<Option<Url>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => Ok(Some(
            Url::parse(raw).with_context(|| format!("WEBHOOK_URL is not a valid URL: {raw}"))?,
        )),
        None => Ok(None),
    }
}

/// Defaults to 8080 only when the variable is absent; garbage is fatal.
fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("PORT is not a valid port number: {raw}")),
        None => Ok(8080),
    }
}
