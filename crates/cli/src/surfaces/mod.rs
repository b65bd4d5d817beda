// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive surfaces of the hub: the search box, the student roster and
//! the newsletter form.
//!
//! Each surface owns its request plumbing and renders through a shared
//! [`Screen`](crate::screen::Screen). The list surfaces sit on a
//! [`RemoteListSync`](hub_sync::RemoteListSync), so only the latest request
//! ever reaches the screen.

mod roster;
mod search;
mod subscribe;

pub use roster::StudentRoster;
pub use search::SearchBox;
pub use subscribe::SubscribeForm;

use std::sync::Arc;

use hub_sync::FetchError;
use parking_lot::Mutex;

/// Latest fetch failure of a list surface, cleared by the next good render.
#[derive(Debug, Clone, Default)]
struct LastError(Arc<Mutex<Option<FetchError>>>);

impl LastError {
    fn set(&self, err: FetchError) {
        *self.0.lock() = Some(err);
    }

    fn clear(&self) {
        *self.0.lock() = None;
    }

    fn take(&self) -> Option<FetchError> {
        self.0.lock().take()
    }
}

/// Shown when a mutation never got a reply.
const SERVER_UNREACHABLE: &str = "Error contacting the server. Please try again later.";

