// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hub_sync::{FetchFuture, Fetcher};

use super::client::ApiClient;

/// Fetches search suggestions for the typed query.
#[derive(Debug, Clone)]
pub struct SuggestionFetcher {
    client: ApiClient,
}

impl SuggestionFetcher {
    pub fn new(client: ApiClient) -> Self {
        SuggestionFetcher { client }
    }
}

impl Fetcher for SuggestionFetcher {
    fn fetch(&self, query: &str) -> FetchFuture<'_> {
        let query = query.to_string();
        Box::pin(async move { self.client.search_suggestions(&query).await })
    }
}

/// Fetches the full student roster; the query is ignored.
#[derive(Debug, Clone)]
pub struct RosterFetcher {
    client: ApiClient,
}

impl RosterFetcher {
    pub fn new(client: ApiClient) -> Self {
        RosterFetcher { client }
    }
}

impl Fetcher for RosterFetcher {
    fn fetch(&self, _query: &str) -> FetchFuture<'_> {
        Box::pin(self.client.list_students())
    }
}
