// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use hub_core::{Collection, Suggestion};
use hub_sync::{FetchError, RemoteListSync, SyncOptions};
use tracing::{debug, warn};

use super::LastError;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::http::{ApiClient, SuggestionFetcher};
use crate::screen::Screen;

/// Debounced search suggestions for a text input.
///
/// Input is trimmed before it is queued. Blank input, an empty result and a
/// failed request all hide the suggestions.
pub struct SearchBox {
    sync: RemoteListSync,
    last_error: LastError,
}

impl SearchBox {
    pub fn new(client: ApiClient, config: &SearchConfig, screen: Arc<dyn Screen>) -> Result<Self> {
        let last_error = LastError::default();

        let render = {
            let screen = Arc::clone(&screen);
            let last_error = last_error.clone();
            move |collection: Collection| match show(screen.as_ref(), &collection) {
                Ok(()) => last_error.clear(),
                Err(err) => {
                    warn!(error = %err, "suggestions dropped");
                    last_error.set(err);
                }
            }
        };
        let on_error = {
            let last_error = last_error.clone();
            move |err: FetchError| {
                warn!(error = %err, "suggestion request failed");
                screen.hide_suggestions();
                last_error.set(err);
            }
        };

        // Blank input never reaches the server, whatever the configured minimum.
        let options = SyncOptions::new(SuggestionFetcher::new(client), render)
            .on_error(on_error)
            .debounce_ms(config.debounce_ms)
            .min_query_length(config.min_query_length.max(1));

        Ok(SearchBox {
            sync: RemoteListSync::configure(options)?,
            last_error,
        })
    }

    /// Feeds the current contents of the input, as on each keystroke.
    pub fn input(&self, raw: &str) {
        self.sync.trigger(raw.trim());
    }

    /// Skips the remaining debounce and asks for the current input now.
    pub fn submit(&self) {
        self.sync.flush();
    }

    /// Waits until no request is queued or in flight.
    pub async fn settled(&self) {
        self.sync.settled().await;
    }

    /// Takes the failure behind the most recent hide, if any.
    pub fn take_error(&self) -> Option<FetchError> {
        self.last_error.take()
    }

    /// Stops the box; pending and in-flight requests are dropped.
    pub fn close(&self) {
        self.sync.dispose();
    }
}

fn show(screen: &dyn Screen, collection: &Collection) -> std::result::Result<(), FetchError> {
    if collection.is_empty() {
        screen.hide_suggestions();
        return Ok(());
    }
    match collection.decode_items::<Suggestion>() {
        Ok(suggestions) => {
            debug!(count = suggestions.len(), "showing suggestions");
            screen.show_suggestions(&suggestions);
            Ok(())
        }
        Err(e) => {
            screen.hide_suggestions();
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
