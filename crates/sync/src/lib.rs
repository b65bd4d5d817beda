// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hub-sync: Debounced remote list synchronization.
//!
//! Decouples "the user caused input N" from "render the result of input N"
//! for list surfaces such as search suggestions or a student roster.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐ trigger ┌────────────────┐ fetch  ┌─────────────┐
//! │  UI events  │────────►│ RemoteListSync │───────►│   Fetcher   │
//! │ (keystrokes)│  flush  │ (token, timer) │◄───────│   (trait)   │
//! └─────────────┘         └────────────────┘ result └─────────────┘
//!                                 │
//!                    token still  │  otherwise
//!                    current?     │  dropped
//!                                 ▼
//!                       render / on_error
//! ```
//!
//! # Features
//!
//! - Classic debounce: bursts of input coalesce into one request
//! - Sequence-token guard: stale responses never overwrite newer state
//! - Minimum query length short-circuit to an empty render
//! - Injectable fetcher and callbacks for testing without a network

mod engine;
mod error;
mod fetcher;
mod options;

pub use engine::{RemoteListSync, RequestToken};
pub use error::{FetchError, FetchResult, SyncError};
pub use fetcher::{fetcher_fn, FetchFuture, Fetcher, FnFetcher};
pub use hub_core::{Collection, Item, ItemId};
pub use options::{ErrorFn, RenderFn, SyncOptions, DEFAULT_DEBOUNCE};

#[cfg(test)]
mod test_helpers;
