// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config resolution as seen through `hub config show`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn show_defaults_without_config_file() {
    let home = home();
    hub(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# source: built-in defaults"))
        .stdout(predicate::str::contains("base_url = \"http://127.0.0.1:5000\""))
        .stdout(predicate::str::contains("debounce_ms = 300"));
}

#[test]
fn show_explicit_config_file() {
    let home = home();
    let path = write_config(&home, "base_url = \"http://hub.test:8080\"\n[search]\ndebounce_ms = 120\n");
    hub(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(path.display().to_string()))
        .stdout(predicate::str::contains("http://hub.test:8080"))
        .stdout(predicate::str::contains("debounce_ms = 120"));
}

#[test]
fn hub_config_env_is_used() {
    let home = home();
    let path = write_config(&home, "timeout_secs = 4\n");
    hub(&home)
        .env("HUB_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout_secs = 4"));
}

#[test]
fn default_location_is_picked_up() {
    let home = home();
    let dir = home.path().join("futureai-hub");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "timeout_secs = 7\n").unwrap();

    // Only platforms whose config dir follows XDG_CONFIG_HOME honour this.
    if cfg!(target_os = "linux") {
        hub(&home)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("timeout_secs = 7"));
    }
}

#[test]
fn base_url_env_overrides_file() {
    let home = home();
    let path = write_config(&home, "base_url = \"http://from-file:1\"\n");
    hub(&home)
        .env("HUB_BASE_URL", "https://from-env.example")
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://from-env.example"))
        .stdout(predicate::str::contains("from-file").not());
}

#[test]
fn missing_explicit_config_fails() {
    let home = home();
    hub(&home)
        .args(["config", "show", "--config", "/nonexistent/hub.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: config file not found"));
}

#[test]
fn invalid_base_url_fails_with_hint() {
    let home = home();
    let path = write_config(&home, "base_url = \"localhost:5000\"\n");
    hub(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: invalid base URL"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn unknown_key_is_rejected() {
    let home = home();
    let path = write_config(&home, "[search]\ndebounce = 10\n");
    hub(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: toml parse error"));
}
