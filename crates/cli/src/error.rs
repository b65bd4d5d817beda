// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the hubrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid base URL: '{0}'\n  hint: expected an http:// or https:// URL such as http://127.0.0.1:5000")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}\n  hint: {hint}", hint = fetch_hint(.0))]
    Fetch(#[from] hub_sync::FetchError),

    /// The server or a local check refused a change; already shown as a notice.
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Core(#[from] hub_core::Error),

    #[error("{0}")]
    Sync(#[from] hub_sync::SyncError),

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// True when the user has already seen this failure on the screen.
    pub fn already_shown(&self) -> bool {
        matches!(self, Error::Rejected(_))
    }
}

fn fetch_hint(err: &hub_sync::FetchError) -> &'static str {
    match err {
        hub_sync::FetchError::Transport(_) => "is the hub server running and is base_url correct?",
        hub_sync::FetchError::Decode(_) => {
            "the server replied with an unexpected body; check that base_url points at the hub server"
        }
    }
}

/// Result type alias for hubrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
