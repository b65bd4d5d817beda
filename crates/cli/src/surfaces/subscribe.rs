// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use hub_core::validate_email;
use tracing::{debug, warn};

use crate::http::ApiClient;
use crate::screen::{Notice, Screen};

pub(crate) const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub(crate) const SUBSCRIBING: &str = "Subscribing…";
pub(crate) const SUBSCRIBED: &str = "Subscribed.";
pub(crate) const SUBSCRIPTION_FAILED: &str = "Subscription failed.";
pub(crate) const SUBSCRIBE_ERROR: &str = "Error subscribing to newsletter. Please try again later.";

/// The newsletter sign-up form.
pub struct SubscribeForm {
    client: ApiClient,
    screen: Arc<dyn Screen>,
}

impl SubscribeForm {
    pub fn new(client: ApiClient, screen: Arc<dyn Screen>) -> Self {
        SubscribeForm { client, screen }
    }

    /// Submits `raw_email` and returns the final notice, which has also been
    /// shown. An address that fails validation is never sent.
    pub async fn submit(&self, raw_email: &str) -> Notice {
        let email = match validate_email(raw_email) {
            Ok(email) => email,
            Err(e) => {
                debug!(error = %e, "subscription not sent");
                return self.report(Notice::danger(INVALID_EMAIL));
            }
        };

        self.screen.notify(Notice::info(SUBSCRIBING));
        let notice = match self.client.subscribe(&email).await {
            Ok(reply) if reply.is_success() => Notice::success(reply.message_or(SUBSCRIBED)),
            Ok(reply) => Notice::danger(reply.message_or(SUBSCRIPTION_FAILED)),
            Err(err) => {
                warn!(error = %err, "subscription request failed");
                Notice::danger(SUBSCRIBE_ERROR)
            }
        };
        self.report(notice)
    }

    fn report(&self, notice: Notice) -> Notice {
        self.screen.notify(notice.clone());
        notice
    }
}

#[cfg(test)]
#[path = "subscribe_tests.rs"]
mod tests;
