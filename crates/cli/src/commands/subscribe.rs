// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::students::conclude;
use super::Context;
use crate::error::Result;
use crate::surfaces::SubscribeForm;

pub async fn run(ctx: &Context, email: &str) -> Result<()> {
    let form = SubscribeForm::new(ctx.client.clone(), ctx.screen.clone());
    let notice = form.submit(email).await;
    conclude(Some(notice))
}
