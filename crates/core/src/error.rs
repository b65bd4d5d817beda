// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hub-core operations.

use thiserror::Error;

/// All possible errors that can occur in hub-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid email address: '{0}'\n  hint: expected something like name@example.com")]
    InvalidEmail(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for hub-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
