// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Debounced fetch-and-render coordinator.
//!
//! Every [`RemoteListSync::trigger`] bumps a monotonically increasing request
//! token and re-arms a single debounce timer. When the timer fires, the
//! fetch runs with the token current at that moment; its outcome is applied
//! only if that token is still current when the fetch completes. Superseded
//! outcomes are dropped silently, so a slow response can never overwrite the
//! result of a newer input.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hub_core::Collection;
use parking_lot::{Mutex, ReentrantMutex};
use tokio::runtime::Handle;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::error::{FetchResult, SyncError};
use crate::options::SyncOptions;

/// Identifies the latest request of a sync instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        RequestToken(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mutable per-instance state, guarded by [`Inner::state`].
struct State {
    token: RequestToken,
    last_query: Option<String>,
    /// Armed debounce timer. Cleared when it fires, so an in-flight fetch is
    /// never aborted by a later trigger.
    timer: Option<JoinHandle<()>>,
    disposed: bool,
}

impl State {
    fn advance(&mut self) -> RequestToken {
        self.token = self.token.next();
        self.token
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Count of spawned tasks that have not finished, with a wakeup for
/// [`RemoteListSync::settled`].
#[derive(Default)]
struct Activity {
    active: AtomicUsize,
    idle: Notify,
}

/// Held by every spawned task; dropping it (on completion or abort) marks
/// the task as finished.
struct ActivityGuard(Arc<Activity>);

impl ActivityGuard {
    fn new(activity: &Arc<Activity>) -> Self {
        activity.active.fetch_add(1, Ordering::SeqCst);
        ActivityGuard(Arc::clone(activity))
    }
}

impl Drop for ActivityGuard {
    fn drop(&mut self) {
        if self.0.active.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

struct Inner {
    options: SyncOptions,
    runtime: Handle,
    state: Mutex<State>,
    /// Held while an outcome is checked and handed to a callback. `dispose`
    /// takes it too, so no callback runs once `dispose` has returned.
    apply_gate: ReentrantMutex<()>,
    activity: Arc<Activity>,
}

impl Inner {
    fn is_current(&self, token: RequestToken) -> bool {
        let state = self.state.lock();
        !state.disposed && state.token == token
    }

    /// Applies a fetch outcome if `token` is still the latest request.
    fn apply(&self, token: RequestToken, outcome: FetchResult<Collection>) {
        let _gate = self.apply_gate.lock();
        if !self.is_current(token) {
            debug!(%token, "dropping stale result");
            return;
        }
        match outcome {
            Ok(collection) => {
                trace!(%token, items = collection.len(), "rendering");
                (self.options.render)(collection);
            }
            Err(err) => {
                warn!(%token, error = %err, "fetch failed");
                (self.options.on_error)(err);
            }
        }
    }

    async fn run_fetch(&self, token: RequestToken, query: String) {
        debug!(%token, query = %query, "fetching");
        let outcome = self.options.fetcher.fetch(&query).await;
        self.apply(token, outcome);
    }
}

/// Debounced remote list synchronization for one UI surface.
///
/// Must be configured inside a tokio runtime; timers and requests are
/// spawned onto that runtime. Dropping the instance disposes it.
pub struct RemoteListSync {
    inner: Arc<Inner>,
}

impl RemoteListSync {
    /// Creates an instance from `options`.
    pub fn configure(options: SyncOptions) -> Result<Self, SyncError> {
        let runtime = Handle::try_current().map_err(|_| SyncError::NoRuntime)?;
        debug!(?options, "configured remote list sync");
        Ok(RemoteListSync {
            inner: Arc::new(Inner {
                options,
                runtime,
                state: Mutex::new(State {
                    token: RequestToken::default(),
                    last_query: None,
                    timer: None,
                    disposed: false,
                }),
                apply_gate: ReentrantMutex::new(()),
                activity: Arc::new(Activity::default()),
            }),
        })
    }

    /// Records a raw input event.
    ///
    /// Invalidates any earlier request and re-arms the debounce timer. A
    /// query below the minimum length renders an empty collection right away
    /// and fetches nothing.
    pub fn trigger(&self, query: impl Into<String>) {
        let query = query.into();
        let mut state = self.inner.state.lock();
        if state.disposed {
            trace!("trigger on disposed sync ignored");
            return;
        }
        let token = state.advance();
        state.cancel_timer();
        state.last_query = Some(query.clone());

        if !self.inner.options.should_fetch(&query) {
            drop(state);
            debug!(%token, "query below minimum length, rendering empty");
            self.inner.apply(token, Ok(Collection::empty()));
            return;
        }

        let guard = ActivityGuard::new(&self.inner.activity);
        let inner = Arc::clone(&self.inner);
        state.timer = Some(self.inner.runtime.spawn(async move {
            let _guard = guard;
            let debounce = inner.options.debounce;
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
            }
            {
                let mut state = inner.state.lock();
                if state.disposed || state.token != token {
                    return;
                }
                state.timer = None;
            }
            inner.run_fetch(token, query).await;
        }));
    }

    /// Cancels the pending timer and fetches the last-seen query now.
    ///
    /// Without a prior trigger this does nothing, unless the instance was
    /// configured with `fetch_on_empty`, in which case it fetches `""`.
    pub fn flush(&self) {
        let mut state = self.inner.state.lock();
        if state.disposed {
            return;
        }
        state.cancel_timer();
        let query = match (&state.last_query, self.inner.options.fetch_on_empty) {
            (Some(query), _) => query.clone(),
            (None, true) => String::new(),
            (None, false) => {
                trace!("flush with nothing to fetch");
                return;
            }
        };
        let token = state.advance();

        if !self.inner.options.should_fetch(&query) {
            drop(state);
            self.inner.apply(token, Ok(Collection::empty()));
            return;
        }

        let guard = ActivityGuard::new(&self.inner.activity);
        let inner = Arc::clone(&self.inner);
        drop(state);
        self.inner.runtime.spawn(async move {
            let _guard = guard;
            inner.run_fetch(token, query).await;
        });
    }

    /// Cancels the pending timer and invalidates the current token.
    ///
    /// Requests already in flight keep running but their outcomes are
    /// dropped. Later `trigger` and `flush` calls are ignored.
    pub fn dispose(&self) {
        {
            let mut state = self.inner.state.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.advance();
            state.cancel_timer();
        }
        // Wait out a callback that passed the token check on another thread.
        let _gate = self.inner.apply_gate.lock();
        debug!("remote list sync disposed");
    }

    /// Resolves once no debounce timer is armed and no request is in flight.
    pub async fn settled(&self) {
        let activity = &self.inner.activity;
        loop {
            let idle = activity.idle.notified();
            if activity.active.load(Ordering::SeqCst) == 0 {
                return;
            }
            idle.await;
        }
    }

    pub fn current_token(&self) -> RequestToken {
        self.inner.state.lock().token
    }

    pub fn last_query(&self) -> Option<String> {
        self.inner.state.lock().last_query.clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.state.lock().disposed
    }

    /// True while a debounce timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().timer.is_some()
    }
}

impl Drop for RemoteListSync {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for RemoteListSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("RemoteListSync")
            .field("token", &state.token)
            .field("last_query", &state.last_query)
            .field("pending", &state.timer.is_some())
            .field("disposed", &state.disposed)
            .finish()
    }
}
