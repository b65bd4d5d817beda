// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side input validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Something, an `@`, something, a dot, something; no whitespace anywhere.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Validates an email address and returns it trimmed.
pub fn validate_email(raw: &str) -> Result<String> {
    let email = raw.trim();
    if EMAIL_RE.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(Error::InvalidEmail(email.to_string()))
    }
}

/// Trims a required text field, rejecting empty values.
pub fn required(field: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        Err(Error::InvalidInput(format!("{field} cannot be empty")))
    } else {
        Ok(value.to_string())
    }
}

/// Trims an optional text field, mapping blank values to `None`.
pub fn optional(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
