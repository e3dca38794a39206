//! Reply builders, one per registered command or button token.
//!
//! Handlers are pure: they read the static content tables and return the
//! messages to send. Delivery (and delivery-failure logging) belongs to the
//! dispatcher.

use rand::Rng;
use teloxide::types::ChatId;

use crate::content;
use crate::dispatch::QUIZ_PREFIX;
use crate::outbox::{Button, OutgoingMessage};

const GREETING: &str = "👋 Welcome! I'm your web development study buddy.\nPick a topic below:";

/// `/start`: greeting plus the fixed six-button menu.
///
/// The `resume` button has no bound handler — pressing it does nothing.
/// That matches the deployed behavior; see DESIGN.md before "fixing" it.
pub fn start(chat_id: ChatId) -> Vec<OutgoingMessage> {
    let menu = vec![
        Button::callback("📚 Resources", "resources"),
        Button::callback("🧠 Quizzes", "quizzes"),
        Button::callback("💡 Projects", "projects"),
        Button::callback("📄 Resume", "resume"),
        Button::callback("💼 Jobs", "jobs"),
        Button::callback("🌟 Tips", "tips"),
    ];
    vec![OutgoingMessage::with_buttons(chat_id, GREETING, menu)]
}

/// Every learning resource in one message, with a link button per entry.
pub fn resources(chat_id: ChatId) -> Vec<OutgoingMessage> {
    let mut text = String::from("📚 Free Learning Resources:\n");
    for link in content::RESOURCES {
        text.push_str(&format!("🔹 {} — {}\n", link.label, link.url));
    }
    let buttons = content::RESOURCES
        .iter()
        .map(|link| Button::link(link.label, link.url))
        .collect();
    vec![OutgoingMessage::with_buttons(chat_id, text, buttons)]
}

/// All job boards, newline-joined, order preserved.
pub fn jobs(chat_id: ChatId) -> Vec<OutgoingMessage> {
    let text = content::JOBS
        .iter()
        .map(|link| format!("{} — {}", link.label, link.url))
        .collect::<Vec<_>>()
        .join("\n");
    vec![OutgoingMessage::text(chat_id, text)]
}

/// One uniformly random project idea.
pub fn projects(chat_id: ChatId) -> Vec<OutgoingMessage> {
    match pick(content::PROJECT_IDEAS) {
        Some(idea) => vec![OutgoingMessage::text(
            chat_id,
            format!("💡 Project idea:\n{idea}"),
        )],
        None => Vec::new(),
    }
}

/// One uniformly random daily tip.
pub fn tips(chat_id: ChatId) -> Vec<OutgoingMessage> {
    match pick(content::DAILY_TIPS) {
        Some(tip) => vec![OutgoingMessage::text(chat_id, format!("🌟 Tip:\n{tip}"))],
        None => Vec::new(),
    }
}

/// One random quiz question with a callback button per option.
pub fn quizzes(chat_id: ChatId) -> Vec<OutgoingMessage> {
    if content::QUIZZES.is_empty() {
        return Vec::new();
    }
    let idx = rand::rng().random_range(0..content::QUIZZES.len());
    let quiz = &content::QUIZZES[idx];
    let buttons = quiz
        .options
        .iter()
        .map(|option| Button::callback(*option, format!("{QUIZ_PREFIX}{option}")))
        .collect();
    vec![OutgoingMessage::with_buttons(chat_id, quiz.question, buttons)]
}

/// Verdict for a pressed quiz option (the token with its prefix stripped).
///
/// The first question whose options contain the text decides the verdict.
/// If two questions ever share an option string, presses from the later
/// question's keyboard get judged against the earlier question — kept
/// bug-for-bug compatible, see DESIGN.md.
pub fn check_quiz_answer(chat_id: ChatId, option: &str) -> Vec<OutgoingMessage> {
    let Some(quiz) = content::QUIZZES.iter().find(|q| q.options.contains(&option)) else {
        return Vec::new();
    };
    let text = if option == quiz.answer {
        "Correct".to_string()
    } else {
        format!("Incorrect, correct answer: {}", quiz.answer)
    };
    vec![OutgoingMessage::text(chat_id, text)]
}

fn pick<'a>(list: &'a [&'a str]) -> Option<&'a str> {
    if list.is_empty() {
        return None;
    }
    let idx = rand::rng().random_range(0..list.len());
    Some(list[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbox::ButtonAction;

    const CHAT: ChatId = ChatId(10);

    #[test]
    fn menu_preserves_button_order() {
        let replies = start(CHAT);
        assert_eq!(replies.len(), 1);
        let tokens: Vec<_> = replies[0]
            .buttons
            .iter()
            .map(|b| match &b.action {
                ButtonAction::Callback(token) => token.as_str(),
                other => panic!("menu button is not a callback: {other:?}"),
            })
            .collect();
        assert_eq!(
            tokens,
            ["resources", "quizzes", "projects", "resume", "jobs", "tips"]
        );
    }

    #[test]
    fn resources_buttons_are_links() {
        let replies = resources(CHAT);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].buttons.len(), content::RESOURCES.len());
        for (button, link) in replies[0].buttons.iter().zip(content::RESOURCES) {
            assert_eq!(button.action, ButtonAction::Link(link.url.to_string()));
        }
    }

    #[test]
    fn quiz_buttons_carry_prefixed_option_tokens() {
        let replies = quizzes(CHAT);
        assert_eq!(replies.len(), 1);
        let quiz = content::QUIZZES
            .iter()
            .find(|q| q.question == replies[0].text)
            .expect("quiz message text is a known question");
        assert_eq!(replies[0].buttons.len(), quiz.options.len());
        for (button, option) in replies[0].buttons.iter().zip(quiz.options) {
            assert_eq!(button.label, *option);
            assert_eq!(
                button.action,
                ButtonAction::Callback(format!("quiz_{option}"))
            );
        }
    }
}
