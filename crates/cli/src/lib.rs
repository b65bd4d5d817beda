// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hubrs - client library behind the `hub` CLI for the FutureAI hub.
//!
//! # Main Components
//!
//! - [`Config`] - Server location, timeouts and debounce settings
//! - [`http::ApiClient`] - JSON client for the hub endpoints
//! - [`surfaces`] - Search box, student roster and newsletter form, each
//!   rendering through a [`screen::Screen`]
//! - [`Error`] - Error types for all operations
//!
//! The list surfaces are built on [`hub_sync::RemoteListSync`], so a burst of
//! input produces one request and only the newest response is shown.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hubrs::{http::ApiClient, screen::TerminalScreen, surfaces::SearchBox, Config};
//!
//! let config = Config::default();
//! let search = SearchBox::new(
//!     ApiClient::new(&config)?,
//!     &config.search,
//!     Arc::new(TerminalScreen::new()),
//! )?;
//! search.input("neural");
//! search.settled().await;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;
pub mod http;
pub mod screen;
pub mod surfaces;

#[cfg(test)]
mod test_support;

pub use cli::{Cli, Command, ConfigCommand, GlobalArgs, StudentArgs, StudentsCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::Context;

/// Runs a parsed command line to completion.
pub async fn run(cli: Cli) -> Result<()> {
    let explicit_config = cli.global.config.as_deref();
    match cli.command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "hub", &mut std::io::stdout());
            Ok(())
        }
        Command::Config(cmd) => commands::config::run(cmd, explicit_config),
        Command::Search { query } => {
            let ctx = Context::open(explicit_config)?;
            commands::search::run(&ctx, query).await
        }
        Command::Students(cmd) => {
            let ctx = Context::open(explicit_config)?;
            commands::students::run(&ctx, cmd).await
        }
        Command::Subscribe { email } => {
            let ctx = Context::open(explicit_config)?;
            commands::subscribe::run(&ctx, &email).await
        }
    }
}
