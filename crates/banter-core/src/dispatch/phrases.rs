//! Fixed phrase sets for the classification cascade.
//!
//! All phrases are in normalized form (trimmed, lower-case); the dispatcher
//! compares against already-normalized input.

pub const EXIT: &[&str] = &["bye", "exit", "quit", "q"];

pub const HELP: &[&str] = &["help", "manual", "commands"];

pub const JOKE: &[&str] = &["joke", "tell me a joke", "tell a joke"];

pub const FACT: &[&str] = &["fact", "tell me a fact", "fun fact"];

pub const TIME: &[&str] = &[
    "time",
    "date",
    "what time is it?",
    "what time is it",
    "what's the time?",
    "what is the date?",
    "what is the date",
];

pub const FLIP: &[&str] = &["flip", "flip a coin", "coin flip", "coin"];

pub const ROLL: &[&str] = &["roll", "roll a dice", "roll dice", "dice"];

pub const UPTIME: &[&str] = &["uptime", "session"];

pub const HISTORY: &[&str] = &["history", "show history"];

pub const CLEAR: &[&str] = &["clear", "cls"];

pub const CALCULATOR: &[&str] = &[
    "calc",
    "calculate",
    "calculator",
    "math",
    "add",
    "sum",
    "add numbers",
    "can you add integers for me?",
    "can you calculate for me?",
];

/// Phrases that terminate the calculator sub-mode.
pub const CALC_EXIT: &[&str] = &["done", "exit", "back", "quit"];

/// Prefix for the reverse-text command; the argument follows the space.
pub const REVERSE_PREFIX: &str = "reverse ";

/// Prefix for the word-count command; the argument follows the space.
pub const COUNT_PREFIX: &str = "count ";
