// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hub-core: Shared types for the futureai-hub client
//!
//! This crate provides the collection model, endpoint reply shapes and
//! input validation used by both the sync engine and the `hub` CLI.

pub mod error;
pub mod item;
pub mod protocol;
pub mod student;
pub mod validate;

pub use error::{Error, Result};
pub use item::{decode_collection, Collection, CollectionDiff, Item, ItemId};
pub use protocol::{ReplyStatus, StatusReply, Suggestion};
pub use student::{NewStudent, Student};
pub use validate::validate_email;
