// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::ConfigCommand;
use crate::config::{default_config_path, Config, ConfigSource};
use crate::error::{Error, Result};

/// Execute a config subcommand.
///
/// Does not need the server, so it runs before any client is built.
pub fn run(cmd: ConfigCommand, explicit: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let (config, source) = Config::resolve(explicit)?;
            print!("{}", render(&config, &source)?);
            Ok(())
        }
        ConfigCommand::Path => {
            let path = default_config_path().ok_or_else(|| {
                Error::InvalidConfig("no config directory on this platform".to_string())
            })?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// The effective config as TOML, headed by a comment naming its source.
fn render(config: &Config, source: &ConfigSource) -> Result<String> {
    let origin = match source {
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Defaults => "built-in defaults".to_string(),
    };
    Ok(format!("# source: {}\n{}", origin, config.to_toml()?))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
