//! Routing from inbound updates to handlers.
//!
//! Both update sources (polling and webhook) reduce Telegram events to
//! [`Update`] and hand them to [`dispatch`]. Routing is a fixed match on an
//! explicit [`Route`] enum: exact tokens first, then the one prefix rule.

use std::sync::Arc;

use teloxide::types::ChatId;
use tracing::{debug, warn};

use crate::handlers;
use crate::outbox::Outbox;

/// Callback tokens starting with this prefix carry a quiz option.
pub const QUIZ_PREFIX: &str = "quiz_";

/// One inbound event, reduced to what routing needs. Consumed exactly once.
#[derive(Debug, Clone)]
pub enum Update {
    CommandMessage { chat_id: ChatId, command_text: String },
    ButtonPress { chat_id: ChatId, callback_token: String },
}

impl Update {
    fn chat_id(&self) -> ChatId {
        match self {
            Update::CommandMessage { chat_id, .. } | Update::ButtonPress { chat_id, .. } => {
                *chat_id
            }
        }
    }
}

/// Everything handlers need from the outside world, built once at startup.
pub struct AppState {
    outbox: Arc<dyn Outbox>,
}

impl AppState {
    pub fn new(outbox: Arc<dyn Outbox>) -> Self {
        Self { outbox }
    }
}

enum Route {
    Start,
    Resources,
    Jobs,
    Projects,
    Tips,
    Quizzes,
    QuizAnswer(String),
}

/// First whitespace-separated token of a message, with any `@botname`
/// mention removed, so `/start@DevMentorBot ref_123` routes like `/start`.
fn command_token(text: &str) -> &str {
    let token = text.split_whitespace().next().unwrap_or("");
    token.split('@').next().unwrap_or(token)
}

/// Exact matches are checked before the `quiz_` prefix. `resume` is
/// deliberately absent: the menu shows it but nothing is bound to it.
fn route(update: &Update) -> Option<Route> {
    match update {
        Update::CommandMessage { command_text, .. } => match command_token(command_text) {
            "/start" => Some(Route::Start),
            _ => None,
        },
        Update::ButtonPress { callback_token, .. } => match callback_token.as_str() {
            "resources" => Some(Route::Resources),
            "jobs" => Some(Route::Jobs),
            "projects" => Some(Route::Projects),
            "tips" => Some(Route::Tips),
            "quizzes" => Some(Route::Quizzes),
            token => token
                .strip_prefix(QUIZ_PREFIX)
                .map(|option| Route::QuizAnswer(option.to_string())),
        },
    }
}

/// Route one update and push the replies out.
///
/// Unroutable updates are dropped. Delivery failures are logged here and
/// never propagate — once dispatched, an update counts as handled. No
/// retries.
pub async fn dispatch(state: &AppState, update: Update) {
    let chat_id = update.chat_id();
    let Some(route) = route(&update) else {
        debug!("no handler for update in chat {chat_id}, dropping");
        return;
    };

    let replies = match route {
        Route::Start => handlers::start(chat_id),
        Route::Resources => handlers::resources(chat_id),
        Route::Jobs => handlers::jobs(chat_id),
        Route::Projects => handlers::projects(chat_id),
        Route::Tips => handlers::tips(chat_id),
        Route::Quizzes => handlers::quizzes(chat_id),
        Route::QuizAnswer(option) => handlers::check_quiz_answer(chat_id, &option),
    };

    for reply in replies {
        if let Err(e) = state.outbox.send(&reply).await {
            warn!("delivery to chat {} failed: {e}", reply.chat_id);
        }
    }
}
