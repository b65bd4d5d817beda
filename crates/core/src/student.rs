// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Student roster rows.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::item::ItemId;
use crate::validate::{optional, required, validate_email};

/// A student as listed by `GET /list_students`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: ItemId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

/// Payload for `POST /add_student`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

impl NewStudent {
    pub fn new(name: impl Into<String>) -> Self {
        NewStudent {
            name: name.into(),
            email: None,
            course: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Returns a trimmed copy, rejecting an empty name or a malformed email.
    ///
    /// Blank optional fields are dropped rather than sent as empty strings.
    pub fn validate(&self) -> Result<NewStudent> {
        let name = required("name", &self.name)?;
        let email = match optional(self.email.as_deref()) {
            Some(email) => Some(validate_email(&email)?),
            None => None,
        };
        Ok(NewStudent {
            name,
            email,
            course: optional(self.course.as_deref()),
        })
    }
}

#[cfg(test)]
#[path = "student_tests.rs"]
mod tests;
