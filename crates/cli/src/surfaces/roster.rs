// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use hub_core::{Collection, ItemId, NewStudent, StatusReply, Student};
use hub_sync::{FetchError, FetchResult, RemoteListSync, SyncOptions};
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use super::{LastError, SERVER_UNREACHABLE};
use crate::config::StudentsConfig;
use crate::error::Result;
use crate::http::{ApiClient, RosterFetcher};
use crate::screen::{Notice, Screen};

const STUDENT_ADDED: &str = "Student added.";
const ADD_FAILED: &str = "Failed to add student.";
const STUDENT_DELETED: &str = "Student deleted.";
const DELETE_FAILED: &str = "Failed to delete student.";

/// The student table, kept in sync with `/list_students`.
///
/// Every successful add or delete refreshes the table. Refreshes race like
/// any other list request: only the newest one renders.
pub struct StudentRoster {
    client: ApiClient,
    screen: Arc<dyn Screen>,
    sync: RemoteListSync,
    last_error: LastError,
}

impl StudentRoster {
    pub fn new(client: ApiClient, config: &StudentsConfig, screen: Arc<dyn Screen>) -> Result<Self> {
        let last_error = LastError::default();
        let shown = Arc::new(Mutex::new(Collection::empty()));

        let render = {
            let screen = Arc::clone(&screen);
            let last_error = last_error.clone();
            move |collection: Collection| {
                log_changes(&shown.lock(), &collection);
                match collection.decode_items::<Student>() {
                    Ok(students) => {
                        screen.show_roster(&students);
                        *shown.lock() = collection;
                        last_error.clear();
                    }
                    Err(e) => {
                        warn!(error = %e, "roster dropped");
                        last_error.set(e.into());
                    }
                }
            }
        };
        let on_error = {
            let last_error = last_error.clone();
            move |err: FetchError| {
                warn!(error = %err, "roster request failed");
                last_error.set(err);
            }
        };

        let options = SyncOptions::new(RosterFetcher::new(client.clone()), render)
            .on_error(on_error)
            .debounce_ms(config.debounce_ms)
            .fetch_on_empty(true);

        Ok(StudentRoster {
            client,
            screen,
            sync: RemoteListSync::configure(options)?,
            last_error,
        })
    }

    /// Reloads the table now.
    pub fn refresh(&self) {
        self.sync.flush();
    }

    /// Validates and submits a new student, then refreshes on success.
    pub async fn add(&self, student: &NewStudent) -> Notice {
        let student = match student.validate() {
            Ok(student) => student,
            Err(e) => return self.report(Notice::danger(e.to_string())),
        };
        let reply = self.client.add_student(&student).await;
        self.conclude(reply, STUDENT_ADDED, ADD_FAILED)
    }

    /// Deletes a student, then refreshes on success.
    pub async fn delete(&self, id: &ItemId) -> Notice {
        let reply = self.client.delete_student(id).await;
        self.conclude(reply, STUDENT_DELETED, DELETE_FAILED)
    }

    pub async fn settled(&self) {
        self.sync.settled().await;
    }

    /// Takes the failure of the latest refresh, if it failed.
    pub fn take_error(&self) -> Option<FetchError> {
        self.last_error.take()
    }

    pub fn close(&self) {
        self.sync.dispose();
    }

    fn conclude(&self, reply: FetchResult<StatusReply>, done: &str, failed: &str) -> Notice {
        let notice = match reply {
            Ok(reply) if reply.is_success() => Notice::success(reply.message_or(done)),
            Ok(reply) => Notice::danger(reply.message_or(failed)),
            Err(err) => {
                warn!(error = %err, "roster change failed");
                Notice::danger(SERVER_UNREACHABLE)
            }
        };
        let changed = !notice.is_failure();
        let notice = self.report(notice);
        if changed {
            self.refresh();
        }
        notice
    }

    fn report(&self, notice: Notice) -> Notice {
        self.screen.notify(notice.clone());
        notice
    }
}

fn log_changes(previous: &Collection, next: &Collection) {
    let diff = next.diff(previous);
    if diff.is_unchanged() {
        trace!(count = next.len(), "roster unchanged");
    } else {
        debug!(
            added = ?diff.added,
            removed = ?diff.removed,
            retained = diff.retained.len(),
            "roster changed"
        );
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
