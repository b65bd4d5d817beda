// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output seam for the list surfaces.
//!
//! Surfaces never print directly. They talk to a [`Screen`], which the binary
//! backs with [`TerminalScreen`] and tests back with a recorder.

use std::fmt;

use hub_core::{Student, Suggestion};

use crate::colors;
use crate::display;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Danger,
    Warning,
    Info,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Danger => "danger",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Info => "info",
        }
    }
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Notice {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Danger, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn is_failure(&self) -> bool {
        self.level == NoticeLevel::Danger
    }
}

/// Where surfaces render.
///
/// Called from sync callbacks on runtime worker threads, so implementations
/// must be shareable.
pub trait Screen: Send + Sync + 'static {
    fn show_suggestions(&self, suggestions: &[Suggestion]);
    fn hide_suggestions(&self);
    fn show_roster(&self, students: &[Student]);
    fn notify(&self, notice: Notice);
}

/// Screen that writes to the terminal.
///
/// Lists and success/info notices go to stdout; danger and warning notices go
/// to stderr.
#[derive(Debug, Clone, Copy)]
pub struct TerminalScreen {
    colorize: bool,
}

impl TerminalScreen {
    pub fn new() -> Self {
        TerminalScreen {
            colorize: colors::should_colorize(),
        }
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn show_suggestions(&self, suggestions: &[Suggestion]) {
        println!("{}", display::format_suggestions(suggestions, self.colorize));
    }

    fn hide_suggestions(&self) {
        tracing::trace!("suggestions hidden");
    }

    fn show_roster(&self, students: &[Student]) {
        println!("{}", display::format_roster(students));
    }

    fn notify(&self, notice: Notice) {
        let line = display::format_notice(&notice, self.colorize);
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => println!("{line}"),
            NoticeLevel::Danger | NoticeLevel::Warning => eprintln!("{line}"),
        }
    }
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
