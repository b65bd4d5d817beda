// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Options accepted by [`RemoteListSync::configure`](crate::RemoteListSync::configure).

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use hub_core::Collection;

use crate::error::FetchError;
use crate::fetcher::Fetcher;

/// Debounce window used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Callback applying an accepted collection to the UI.
pub type RenderFn = Arc<dyn Fn(Collection) + Send + Sync>;

/// Callback receiving a surfaced fetch failure.
pub type ErrorFn = Arc<dyn Fn(FetchError) + Send + Sync>;

/// Configuration for one sync instance.
///
/// `fetcher` and `render` are required and therefore taken by [`SyncOptions::new`];
/// everything else has a default.
#[derive(Clone)]
pub struct SyncOptions {
    pub(crate) fetcher: Arc<dyn Fetcher>,
    pub(crate) render: RenderFn,
    pub(crate) on_error: ErrorFn,
    pub(crate) debounce: Duration,
    pub(crate) min_query_length: usize,
    pub(crate) fetch_on_empty: bool,
}

impl SyncOptions {
    pub fn new<F, R>(fetcher: F, render: R) -> Self
    where
        F: Fetcher,
        R: Fn(Collection) + Send + Sync + 'static,
    {
        SyncOptions {
            fetcher: Arc::new(fetcher),
            render: Arc::new(render),
            on_error: Arc::new(|_| {}),
            debounce: DEFAULT_DEBOUNCE,
            min_query_length: 0,
            fetch_on_empty: false,
        }
    }

    /// Sets the failure callback. Defaults to a no-op.
    pub fn on_error<E>(mut self, on_error: E) -> Self
    where
        E: Fn(FetchError) + Send + Sync + 'static,
    {
        self.on_error = Arc::new(on_error);
        self
    }

    /// Sets the quiet period that must elapse after the last trigger.
    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn debounce_ms(self, ms: u64) -> Self {
        self.debounce(Duration::from_millis(ms))
    }

    /// Queries shorter than this (in characters) render an empty collection
    /// without fetching.
    pub fn min_query_length(mut self, len: usize) -> Self {
        self.min_query_length = len;
        self
    }

    /// Lets the empty query fetch: `flush` with no prior trigger then fetches
    /// `""`, and `""` bypasses `min_query_length`.
    pub fn fetch_on_empty(mut self, enabled: bool) -> Self {
        self.fetch_on_empty = enabled;
        self
    }

    pub fn debounce_duration(&self) -> Duration {
        self.debounce
    }

    pub fn min_len(&self) -> usize {
        self.min_query_length
    }

    pub fn fetches_on_empty(&self) -> bool {
        self.fetch_on_empty
    }

    /// Whether `query` goes to the fetcher or short-circuits to an empty render.
    pub(crate) fn should_fetch(&self, query: &str) -> bool {
        if query.is_empty() && self.fetch_on_empty {
            return true;
        }
        query.chars().count() >= self.min_query_length
    }
}

impl fmt::Debug for SyncOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncOptions")
            .field("debounce", &self.debounce)
            .field("min_query_length", &self.min_query_length)
            .field("fetch_on_empty", &self.fetch_on_empty)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
