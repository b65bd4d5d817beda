// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod search;
pub mod students;
pub mod subscribe;

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::config::{Config, ConfigSource};
use crate::error::Result;
use crate::http::ApiClient;
use crate::screen::{Screen, TerminalScreen};

/// Everything a command needs to talk to the hub.
pub struct Context {
    pub config: Config,
    pub client: ApiClient,
    pub screen: Arc<dyn Screen>,
}

impl Context {
    /// Resolves configuration and builds the client and terminal screen.
    pub fn open(explicit_config: Option<&Path>) -> Result<Self> {
        let (config, source) = Config::resolve(explicit_config)?;
        match &source {
            ConfigSource::File(path) => debug!(path = %path.display(), "loaded config"),
            ConfigSource::Defaults => debug!("no config file, using defaults"),
        }
        Self::with_screen(config, Arc::new(TerminalScreen::new()))
    }

    pub fn with_screen(config: Config, screen: Arc<dyn Screen>) -> Result<Self> {
        let client = ApiClient::new(&config)?;
        Ok(Context {
            config,
            client,
            screen,
        })
    }
}
