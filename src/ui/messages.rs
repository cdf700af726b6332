//! Operator-facing status lines.
//!
//! Everything but `error` goes to stdout: at a kiosk the message belongs on
//! the same screen as the participant card it refers to.

use ansi_term::{Colour, Style};
use std::fmt;

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", Style::new().bold().fg(colour).paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, "⚠️", msg));
}

pub fn inline_error<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Red, "❌", msg));
}

/// Fatal errors, on stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, "❌", msg));
}

pub fn header<T: fmt::Display>(title: T) {
    let title = title.to_string();
    let rule = "═".repeat(title.chars().count() + 4);
    let style = Style::new().bold().fg(Colour::Cyan);
    println!("\n{}\n{}\n{}", style.paint(rule.as_str()), style.paint(format!("  {title}")), style.paint(rule.as_str()));
}
