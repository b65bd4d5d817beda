// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::Context;
use crate::error::Result;
use crate::surfaces::SearchBox;

/// Look up suggestions for `query`, or replay stdin lines as keystrokes.
pub async fn run(ctx: &Context, query: Option<String>) -> Result<()> {
    match query {
        Some(query) => run_once(ctx, &query).await,
        None => run_keystrokes(ctx, BufReader::new(tokio::io::stdin())).await,
    }
}

async fn run_once(ctx: &Context, query: &str) -> Result<()> {
    let search = open(ctx)?;
    search.input(query);
    search.submit();
    search.settled().await;
    finish(&search)
}

/// Each line is the full contents of the input after a keystroke. Lines that
/// arrive within the debounce window collapse into one request.
pub(crate) async fn run_keystrokes<R>(ctx: &Context, reader: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let search = open(ctx)?;
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        search.input(&line);
    }
    search.settled().await;
    finish(&search)
}

fn open(ctx: &Context) -> Result<SearchBox> {
    SearchBox::new(
        ctx.client.clone(),
        &ctx.config.search,
        ctx.screen.clone(),
    )
}

fn finish(search: &SearchBox) -> Result<()> {
    match search.take_error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
