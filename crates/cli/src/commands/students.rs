// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use hub_core::ItemId;

use super::Context;
use crate::cli::StudentsCommand;
use crate::error::{Error, Result};
use crate::screen::Notice;
use crate::surfaces::StudentRoster;

/// Execute a students subcommand.
pub async fn run(ctx: &Context, cmd: StudentsCommand) -> Result<()> {
    let roster = StudentRoster::new(
        ctx.client.clone(),
        &ctx.config.students,
        ctx.screen.clone(),
    )?;

    let notice = match cmd {
        StudentsCommand::List => {
            roster.refresh();
            None
        }
        StudentsCommand::Add(args) => Some(roster.add(&args.into()).await),
        StudentsCommand::Delete { id } => {
            let id = ItemId::parse(&id)?;
            Some(roster.delete(&id).await)
        }
    };

    roster.settled().await;
    conclude(notice)?;
    match roster.take_error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// A failed change was already shown as a notice; only the exit status is left.
pub(crate) fn conclude(notice: Option<Notice>) -> Result<()> {
    match notice {
        Some(notice) if notice.is_failure() => Err(Error::Rejected(notice.message)),
        _ => Ok(()),
    }
}
