// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use std::path::PathBuf;

use clap::Args;
use hub_core::NewStudent;

/// Options accepted by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Fields of a new student.
#[derive(Args, Clone, Debug, Default)]
pub struct StudentArgs {
    /// Full name
    #[arg(long, value_parser = super::non_empty_string)]
    pub name: String,

    /// Contact email
    #[arg(long, short)]
    pub email: Option<String>,

    /// Enrolled course
    #[arg(long, short)]
    pub course: Option<String>,
}

impl From<StudentArgs> for NewStudent {
    fn from(args: StudentArgs) -> Self {
        NewStudent {
            name: args.name,
            email: args.email,
            course: args.course,
        }
    }
}
