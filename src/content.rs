//! Static reference data served by the handlers.
//!
//! Everything here is baked into the binary and read-only at runtime.
//! The invariants (non-empty lists, quiz answers listed among their
//! options) are enforced by the tests below, not by runtime checks.

/// A labelled hyperlink.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

/// One multiple-choice question. `answer` must be one of `options`.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
}

pub const RESOURCES: &[Link] = &[
    Link {
        label: "🔗 MDN Web Docs",
        url: "https://developer.mozilla.org/en-US/",
    },
    Link {
        label: "🎓 freeCodeCamp",
        url: "https://www.freecodecamp.org/",
    },
    Link {
        label: "📖 The Odin Project",
        url: "https://www.theodinproject.com/",
    },
    Link {
        label: "📘 Eloquent JavaScript",
        url: "https://eloquentjavascript.net/",
    },
];

pub const JOBS: &[Link] = &[
    Link {
        label: "💼 Remote OK",
        url: "https://remoteok.com/remote-dev-jobs",
    },
    Link {
        label: "💼 We Work Remotely",
        url: "https://weworkremotely.com/categories/remote-programming-jobs",
    },
    Link {
        label: "💼 Wellfound",
        url: "https://wellfound.com/jobs",
    },
    Link {
        label: "💼 HN Who is hiring?",
        url: "https://news.ycombinator.com/submitted?id=whoishiring",
    },
];

pub const PROJECT_IDEAS: &[&str] = &[
    "Build a personal portfolio site with a responsive layout",
    "Write a to-do app that keeps tasks in localStorage",
    "Clone the Hacker News front page using its public API",
    "Build a weather dashboard on top of a free weather API",
    "Create a markdown previewer with live rendering",
    "Build a quiz game with a countdown timer",
    "Make a URL shortener backed by an in-memory map",
    "Build a recipe search page with debounced input",
];

pub const DAILY_TIPS: &[&str] = &[
    "Read error messages top to bottom before searching for them.",
    "Commit early and often — small commits are easy to revert.",
    "Learn your editor's multi-cursor shortcuts. They pay off daily.",
    "console.log is fine, but the debugger's watch panel is faster.",
    "Name things for what they mean, not for what they are.",
    "Stuck for 30 minutes? Explain the problem out loud.",
    "Semantic HTML gets you most of accessibility for free.",
    "Reproduce a bug reliably before you try to fix it.",
];

pub const QUIZZES: &[QuizQuestion] = &[
    QuizQuestion {
        question: "What does CSS stand for?",
        options: &[
            "Cascading Style Sheets",
            "Creative Style System",
            "Computer Styled Sections",
        ],
        answer: "Cascading Style Sheets",
    },
    QuizQuestion {
        question: "Which HTML tag creates a hyperlink?",
        options: &["<a>", "<link>", "<href>"],
        answer: "<a>",
    },
    QuizQuestion {
        question: "Which keyword declares a block-scoped variable in JavaScript?",
        options: &["let", "var", "function"],
        answer: "let",
    },
    QuizQuestion {
        question: "Which HTTP status code means Not Found?",
        options: &["404", "200", "301", "500"],
        answer: "404",
    },
    QuizQuestion {
        question: "Which array method appends an element in JavaScript?",
        options: &["push()", "pop()", "shift()"],
        answer: "push()",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn quiz_answers_are_listed_options() {
        for q in QUIZZES {
            assert!(q.options.contains(&q.answer), "bad answer in: {}", q.question);
        }
    }

    #[test]
    fn quiz_options_are_unique_and_bounded() {
        for q in QUIZZES {
            assert!(
                (2..=4).contains(&q.options.len()),
                "option count out of range in: {}",
                q.question
            );
            let unique: HashSet<_> = q.options.iter().collect();
            assert_eq!(unique.len(), q.options.len(), "duplicate option in: {}", q.question);
        }
    }

    #[test]
    fn content_lists_are_non_empty() {
        assert!(!RESOURCES.is_empty());
        assert!(!JOBS.is_empty());
        assert!(!PROJECT_IDEAS.is_empty());
        assert!(!DAILY_TIPS.is_empty());
        assert!(!QUIZZES.is_empty());
    }

    #[test]
    fn every_entry_renders_to_text() {
        for link in RESOURCES.iter().chain(JOBS) {
            assert!(!link.label.is_empty());
            assert!(!link.url.is_empty());
        }
        for s in PROJECT_IDEAS.iter().chain(DAILY_TIPS) {
            assert!(!s.is_empty());
        }
        for q in QUIZZES {
            assert!(!q.question.is_empty());
            assert!(!q.answer.is_empty());
        }
    }

    #[test]
    fn link_urls_parse() {
        for link in RESOURCES.iter().chain(JOBS) {
            url::Url::parse(link.url).unwrap_or_else(|e| panic!("{}: {e}", link.url));
        }
    }
}
