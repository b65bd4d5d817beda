// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the value of `HUB_CONFIG` if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    lookup(vars::HUB_CONFIG).map(PathBuf::from)
}

/// Returns the value of `HUB_BASE_URL` if set and non-empty.
pub fn base_url() -> Option<String> {
    lookup(vars::HUB_BASE_URL)
}

/// Returns the value of `RUST_LOG` if set and non-empty.
pub fn rust_log() -> Option<String> {
    lookup(vars::RUST_LOG)
}

fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
