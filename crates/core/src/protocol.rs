// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON endpoints exposed by the hub backend and their reply shapes.
//!
//! The backend is assumed, not owned by this workspace:
//! - `GET /search_suggestions?q=<query>` returns an array of [`Suggestion`] rows
//! - `GET /list_students` returns an array of [`Student`](crate::Student) rows
//! - `POST /add_student` and `POST /delete_student/<id>` return a [`StatusReply`]
//! - `POST /subscribe` takes a urlencoded `email` field and returns a [`StatusReply`]

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::item::ItemId;

pub const SEARCH_SUGGESTIONS_PATH: &str = "/search_suggestions";
pub const LIST_STUDENTS_PATH: &str = "/list_students";
pub const ADD_STUDENT_PATH: &str = "/add_student";
pub const DELETE_STUDENT_PATH: &str = "/delete_student";
pub const SUBSCRIBE_PATH: &str = "/subscribe";

/// Path for deleting a single student.
pub fn delete_student_path(id: &ItemId) -> String {
    format!("{DELETE_STUDENT_PATH}/{id}")
}

/// A search suggestion; selecting it navigates to the post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: ItemId,
    pub title: String,
}

impl Suggestion {
    /// Page the suggestion links to.
    pub fn post_path(&self) -> String {
        format!("/post/{}", self.id)
    }
}

/// Outcome field of a [`StatusReply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStatus {
    Success,
    /// Anything other than `success`; the backend uses `fail`.
    #[serde(other)]
    Fail,
}

/// `{ "status": "...", "message": "..." }` reply of the mutation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReply {
    pub status: ReplyStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusReply {
    pub fn fail(message: impl Into<String>) -> Self {
        StatusReply {
            status: ReplyStatus::Fail,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Success
    }

    /// The server message, or `fallback` when the reply carried none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
    }

    /// Decodes a reply body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| Error::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
