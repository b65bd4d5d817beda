// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(color(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
        .error(color(colors::codes::DANGER))
}

/// Main help template: command list, then options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_hub}
  {search}      Suggest posts as you type
  {students}    List, add or delete students
  {subscribe}   Subscribe to the newsletter

{header_setup}
  {config}      Show the effective configuration
  {completion}  Generate shell completions
",
        header_hub = colors::header("Hub:"),
        header_setup = colors::header("Setup:"),
        search = colors::literal("search"),
        students = colors::literal("students"),
        subscribe = colors::literal("subscribe"),
        config = colors::literal("config"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  hub search \"neural nets\"      Suggest posts for a query
  hub students list             Show the student roster
  hub subscribe me@example.com  Join the newsletter",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
