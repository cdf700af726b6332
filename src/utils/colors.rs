/// ANSI color helper utilities for terminal output.
use crate::models::journal::Outcome;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn color_for_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Claimed => GREEN,
        Outcome::Duplicate => YELLOW,
        Outcome::Rejected | Outcome::LookupFailed => RED,
    }
}

/// Grey for an empty / placeholder value, the value itself otherwise.
///
/// Esempio:
/// `colorize_optional("")` → "<grey>--<reset>"
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
