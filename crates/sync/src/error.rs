// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the sync engine.

/// Failure of a single fetch, reported once through `on_error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network failure, timeout, or non-success status.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded into a collection.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<hub_core::Error> for FetchError {
    fn from(err: hub_core::Error) -> Self {
        match err {
            hub_core::Error::Decode(msg) => FetchError::Decode(msg),
            hub_core::Error::Json(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Transport(other.to_string()),
        }
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Error type for setting up a sync instance.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Timers and requests need a tokio runtime to run on.
    #[error("no tokio runtime available\n  hint: configure the sync engine from within a tokio runtime")]
    NoRuntime,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
