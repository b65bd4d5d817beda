// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for surface tests.

use std::sync::Arc;
use std::time::Duration;

use hub_core::{Student, Suggestion};
use parking_lot::Mutex;
use wiremock::MockServer;

use crate::http::ApiClient;
use crate::screen::{Notice, Screen};

/// One call made against a [`RecordingScreen`].
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    Suggestions(Vec<String>),
    Hidden,
    Roster(Vec<String>),
    Notice(Notice),
}

/// Screen that records every call, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingScreen {
    events: Arc<Mutex<Vec<ScreenEvent>>>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ScreenEvent> {
        self.events.lock().clone()
    }

    pub fn last(&self) -> Option<ScreenEvent> {
        self.events.lock().last().cloned()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                ScreenEvent::Notice(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }

    /// Names from every roster render, oldest first.
    pub fn rosters(&self) -> Vec<Vec<String>> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                ScreenEvent::Roster(names) => Some(names.clone()),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ScreenEvent) {
        self.events.lock().push(event);
    }
}

impl Screen for RecordingScreen {
    fn show_suggestions(&self, suggestions: &[Suggestion]) {
        self.push(ScreenEvent::Suggestions(
            suggestions.iter().map(|s| s.title.clone()).collect(),
        ));
    }

    fn hide_suggestions(&self) {
        self.push(ScreenEvent::Hidden);
    }

    fn show_roster(&self, students: &[Student]) {
        self.push(ScreenEvent::Roster(
            students.iter().map(|s| s.name.clone()).collect(),
        ));
    }

    fn notify(&self, notice: Notice) {
        self.push(ScreenEvent::Notice(notice));
    }
}

#[allow(clippy::unwrap_used)]
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(&server.uri(), Duration::from_secs(2)).unwrap()
}
