// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fetcher abstraction.
//!
//! The sync engine never talks to the network itself. Callers hand it a
//! [`Fetcher`] that turns a query into a [`Collection`]:
//! - HTTP fetchers in the `hub` CLI for production
//! - Scripted fetchers for unit testing

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use hub_core::Collection;

use crate::error::FetchResult;

/// Boxed future returned by [`Fetcher::fetch`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = FetchResult<Collection>> + Send + 'a>>;

/// Performs the actual request for a query and decodes the response.
///
/// Timeout policy belongs to the implementation; the engine imposes none.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch(&self, query: &str) -> FetchFuture<'_>;
}

impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    fn fetch(&self, query: &str) -> FetchFuture<'_> {
        (**self).fetch(query)
    }
}

/// Adapter turning an async closure into a [`Fetcher`].
pub struct FnFetcher<F> {
    f: F,
}

/// Wraps `f` so it can be passed where a [`Fetcher`] is expected.
pub fn fetcher_fn<F, Fut>(f: F) -> FnFetcher<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FetchResult<Collection>> + Send + 'static,
{
    FnFetcher { f }
}

impl<F, Fut> Fetcher for FnFetcher<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FetchResult<Collection>> + Send + 'static,
{
    fn fetch(&self, query: &str) -> FetchFuture<'_> {
        Box::pin((self.f)(query.to_string()))
    }
}
