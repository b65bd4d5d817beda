// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log setup for the `hub` binary.
//!
//! Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_DIRECTIVE: &str = "warn";
const VERBOSE_DIRECTIVE: &str = "warn,hubrs=debug,hub_sync=debug,hub_core=debug";

/// Picks the filter directive: `RUST_LOG` wins, then `--verbose`.
pub fn directive(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directive) => directive,
        None if verbose => VERBOSE_DIRECTIVE.to_string(),
        None => DEFAULT_DIRECTIVE.to_string(),
    }
}

/// Installs the global subscriber. Call once, from `main`.
pub fn init(verbose: bool) {
    let directive = directive(verbose, env::rust_log());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
