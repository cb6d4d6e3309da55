//! Application constants shared across the crate.

pub const APP_NAME: &str = "folio";

/// Environment variable the Gemini API key is read from, once, at startup.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for regular exchanges. Search grounding is enabled for it.
pub const QUICK_MODEL: &str = "gemini-2.5-flash";

/// Model used when deep-thought mode is on. No search tool; instead the
/// backend gets a large internal reasoning budget.
pub const DEEP_MODEL: &str = "gemini-2.5-pro";

pub const DEEP_THINKING_BUDGET: u32 = 32_768;

/// The one message every fresh (or cleared, or unrecoverable) conversation
/// starts with.
pub const GREETING: &str = "Hello! I'm Anmol's AI assistant. I'm trained on \
his professional background and approach to work. Feel free to ask me \
anything about his experience, skills, or projects.";

/// Fixed user-facing failure text. Shown as a normal chat bubble whenever an
/// exchange cannot be completed, whatever the underlying cause.
pub const CONNECT_APOLOGY: &str =
    "Sorry, I'm having a bit of trouble connecting. Please try again later.";

/// One-line hint shown the first time deep-thought mode is toggled.
pub const DEEP_THOUGHT_HINT: &str = "For complex, creative, or technical questions.";

/// Starter questions offered while the conversation holds only the greeting.
pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "What was Anmol's biggest achievement at Tummo Labs?",
    "Explain his approach to human-centered AI.",
    "What are his strongest technical skills?",
];
