// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output and notices.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;
use crate::screen::NoticeLevel;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    pub const SUCCESS: u8 = 114;
    pub const DANGER: u8 = 203;
    pub const WARNING: u8 = 221;
    pub const INFO: u8 = HEADER;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color code for a notice level.
pub fn level_code(level: NoticeLevel) -> u8 {
    match level {
        NoticeLevel::Success => codes::SUCCESS,
        NoticeLevel::Danger => codes::DANGER,
        NoticeLevel::Warning => codes::WARNING,
        NoticeLevel::Info => codes::INFO,
    }
}

/// Apply the notice level's color to text.
pub fn level(level: NoticeLevel, text: &str) -> String {
    paint(level_code(level), text)
}

/// Colorize an examples help block.
///
/// Header lines (ending with `:`) get the header color; on example lines
/// the command before the two-space gap gets the literal color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 128);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        match trimmed.find("  ") {
            Some(cmd_end) => {
                result.push_str(indent);
                result.push_str(&literal(&trimmed[..cmd_end]));
                result.push_str(&trimmed[cmd_end..]);
            }
            None => result.push_str(line),
        }
    }
    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
