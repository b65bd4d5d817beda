// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP access to the hub server.
//!
//! [`ApiClient`] wraps the JSON endpoints; [`SuggestionFetcher`] and
//! [`RosterFetcher`] adapt it to the sync engine's fetcher seam.

mod client;
mod fetchers;

pub use client::ApiClient;
pub use fetchers::{RosterFetcher, SuggestionFetcher};
