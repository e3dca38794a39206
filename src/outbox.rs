//! The outgoing side: reply messages and the channel that delivers them.
//!
//! Handlers build [`OutgoingMessage`] values; the dispatcher pushes them
//! through an [`Outbox`]. Production uses [`TelegramOutbox`]; tests swap in
//! a recording fake.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup};
use thiserror::Error;
use url::Url;

/// What an inline button does when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Token echoed back by Telegram as a callback query.
    Callback(String),
    /// Link opened by the client. Never mixed with callbacks in one message.
    Link(String),
}

/// One inline button: a label plus its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn callback(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(token.into()),
        }
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Link(url.into()),
        }
    }
}

/// A reply ready to send. Ephemeral — built by a handler, consumed by the
/// outbox, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub buttons: Vec<Button>,
}

impl OutgoingMessage {
    pub fn text(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            buttons: Vec::new(),
        }
    }

    pub fn with_buttons(chat_id: ChatId, text: impl Into<String>, buttons: Vec<Button>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            buttons,
        }
    }
}

/// Marker that a message was handed to the Telegram API.
#[derive(Debug)]
pub struct Sent;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("telegram api: {0}")]
    Telegram(#[from] teloxide::RequestError),
    #[error("invalid link button url: {0}")]
    BadUrl(#[from] url::ParseError),
}

/// The one capability handlers need from the outside world.
#[async_trait]
pub trait Outbox: Send + Sync {
    async fn send(&self, msg: &OutgoingMessage) -> Result<Sent, DeliveryError>;
}

/// Sends through the Telegram Bot API.
pub struct TelegramOutbox {
    bot: Bot,
}

impl TelegramOutbox {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Outbox for TelegramOutbox {
    async fn send(&self, msg: &OutgoingMessage) -> Result<Sent, DeliveryError> {
        let request = self.bot.send_message(msg.chat_id, msg.text.clone());
        if msg.buttons.is_empty() {
            request.await?;
        } else {
            request.reply_markup(keyboard(&msg.buttons)?).await?;
        }
        Ok(Sent)
    }
}

/// One button per row, like the original keyboards.
fn keyboard(buttons: &[Button]) -> Result<InlineKeyboardMarkup, DeliveryError> {
    let mut rows = Vec::with_capacity(buttons.len());
    for button in buttons {
        let inline = match &button.action {
            ButtonAction::Callback(token) => {
                InlineKeyboardButton::callback(button.label.clone(), token.clone())
            }
            ButtonAction::Link(url) => {
                InlineKeyboardButton::url(button.label.clone(), Url::parse(url)?)
            }
        };
        rows.push(vec![inline]);
    }
    Ok(InlineKeyboardMarkup::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn keyboard_maps_callback_and_link_buttons() {
        let markup = keyboard(&[
            Button::callback("Play", "quizzes"),
            Button::link("Docs", "https://developer.mozilla.org/en-US/"),
        ])
        .unwrap();

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 1);

        match &markup.inline_keyboard[0][0].kind {
            InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, "quizzes"),
            other => panic!("expected callback button, got {other:?}"),
        }
        match &markup.inline_keyboard[1][0].kind {
            InlineKeyboardButtonKind::Url(url) => {
                assert_eq!(url.as_str(), "https://developer.mozilla.org/en-US/");
            }
            other => panic!("expected url button, got {other:?}"),
        }
    }

    #[test]
    fn keyboard_rejects_invalid_url() {
        let err = keyboard(&[Button::link("broken", "not a url")]);
        assert!(matches!(err, Err(DeliveryError::BadUrl(_))));
    }
}
