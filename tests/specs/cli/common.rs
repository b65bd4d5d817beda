// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use serde_json::json;
pub use tempfile::TempDir;
pub use wiremock::matchers::{body_json, body_string, method, path, query_param};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `hub` isolated from the caller's environment: no config file, no color,
/// no inherited log filter. Uses `home` as the config directory.
pub fn hub(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("hub");
    cmd.env_remove("HUB_CONFIG")
        .env_remove("HUB_BASE_URL")
        .env_remove("RUST_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path());
    cmd
}

/// `hub` pointed at `server`.
pub fn hub_for(home: &TempDir, server: &MockServer) -> Command {
    let mut cmd = hub(home);
    cmd.env("HUB_BASE_URL", server.uri());
    cmd
}

/// A base URL nothing listens on.
pub const DEAD_URL: &str = "http://127.0.0.1:1";

pub fn home() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes `content` as a config file and returns its path.
pub fn write_config(home: &TempDir, content: &str) -> std::path::PathBuf {
    let path = home.path().join("hub.toml");
    std::fs::write(&path, content).unwrap();
    path
}
