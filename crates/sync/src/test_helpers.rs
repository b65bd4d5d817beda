// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync engine tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use hub_core::{Collection, Item};
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::error::FetchError;
use crate::fetcher::{FetchFuture, Fetcher};

/// A fetch observed by [`ScriptedFetcher`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCall {
    pub query: String,
    /// Time since the fetcher was created.
    pub at: Duration,
}

/// Fetcher with per-query latency and failures, recording every call.
#[derive(Clone)]
pub struct ScriptedFetcher {
    started: Instant,
    calls: Arc<Mutex<Vec<FetchCall>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    failures: Arc<Mutex<HashMap<String, FetchError>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        ScriptedFetcher {
            started: Instant::now(),
            calls: Arc::new(Mutex::new(Vec::new())),
            delays: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Makes fetches for `query` take `delay` before resolving.
    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().insert(query.to_string(), delay);
    }

    /// Makes fetches for `query` fail with `err`.
    pub fn fail(&self, query: &str, err: FetchError) {
        self.failures.lock().insert(query.to_string(), err);
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().clone()
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().iter().map(|c| c.query.clone()).collect()
    }
}

impl Fetcher for ScriptedFetcher {
    fn fetch(&self, query: &str) -> FetchFuture<'_> {
        let query = query.to_string();
        self.calls.lock().push(FetchCall {
            query: query.clone(),
            at: self.started.elapsed(),
        });
        let delay = self.delays.lock().get(&query).copied();
        let failure = self.failures.lock().get(&query).cloned();
        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            match failure {
                Some(err) => Err(err),
                None => Ok(collection_for(&query)),
            }
        })
    }
}

/// The collection [`ScriptedFetcher`] answers `query` with.
pub fn collection_for(query: &str) -> Collection {
    Collection::new(vec![Item::new(query).with("query", query)])
}

/// Records what reached the render and error callbacks.
#[derive(Clone, Default)]
pub struct Recorder {
    pub renders: Arc<Mutex<Vec<Collection>>>,
    pub errors: Arc<Mutex<Vec<FetchError>>>,
}

impl Recorder {
    pub fn render_fn(&self) -> impl Fn(Collection) + Send + Sync + 'static {
        let renders = Arc::clone(&self.renders);
        move |collection| renders.lock().push(collection)
    }

    pub fn error_fn(&self) -> impl Fn(FetchError) + Send + Sync + 'static {
        let errors = Arc::clone(&self.errors);
        move |err| errors.lock().push(err)
    }

    pub fn renders(&self) -> Vec<Collection> {
        self.renders.lock().clone()
    }

    pub fn errors(&self) -> Vec<FetchError> {
        self.errors.lock().clone()
    }
}
