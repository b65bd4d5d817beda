// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use hubrs::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    hubrs::logging::init(cli.global.verbose);
    if let Err(e) = hubrs::run(cli).await {
        if !e.already_shown() {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
