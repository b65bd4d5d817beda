// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help and usage output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn help_lists_commands() {
    let home = home();
    hub(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("students"))
        .stdout(predicate::str::contains("subscribe"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let home = home();
    hub(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[parameterized(
    search = { &["search"] },
    students = { &["students"] },
    students_add = { &["students", "add"] },
    subscribe = { &["subscribe"] },
    config = { &["config"] },
    completion = { &["completion"] },
)]
fn command_supports_help_flag(args: &[&str]) {
    let home = home();
    hub(&home)
        .args(args)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn help_without_color_has_no_escapes() {
    let home = home();
    hub(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn version_flag() {
    let home = home();
    hub(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_fails() {
    let home = home();
    hub(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}
