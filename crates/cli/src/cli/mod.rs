// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub use args::{GlobalArgs, StudentArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "hub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the FutureAI hub")]
#[command(
    long_about = "Command-line client for the FutureAI hub.\n\n\
    Search posts as you type, manage the student roster and subscribe to the newsletter."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Suggest posts for a query, or for each line typed on stdin
    #[command(after_help = colors::examples("\
Examples:
  hub search rust                 Suggestions for one query
  printf 'r\\nru\\nrust\\n' | hub search   Lines are keystrokes; only the last is sent"))]
    Search {
        /// Query to look up; read keystrokes from stdin when omitted
        query: Option<String>,
    },

    /// Manage the student roster
    #[command(subcommand)]
    Students(StudentsCommand),

    /// Subscribe an email address to the newsletter
    #[command(after_help = colors::examples("\
Examples:
  hub subscribe ada@example.com   Subscribe Ada"))]
    Subscribe {
        /// Address to subscribe
        email: String,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completion {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum StudentsCommand {
    /// Show every student
    List,

    /// Add a student, then show the updated roster
    #[command(after_help = colors::examples("\
Examples:
  hub students add --name \"Ada Lovelace\" --course Maths
  hub students add --name Grace -e grace@example.com"))]
    Add(StudentArgs),

    /// Delete a student by id, then show the updated roster
    Delete {
        /// Student id
        #[arg(value_parser = non_empty_string)]
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Print the path of the default config file
    Path,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
