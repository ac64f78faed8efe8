//! Order confirmation dispatch.
//!
//! Best-effort, at-most-once-per-recipient delivery to the owner's
//! registered address and, when it differs, the confirmation address from
//! the checkout request. Attempts are independent: one failing or hanging
//! never prevents the other, and no outcome ever reaches the checkout
//! caller as an error.

use std::{sync::Arc, time::Duration};

use serde_json::{Map, Value};
use tokio::time::timeout;
use tracing::{info, warn};

use crate::{
    domain::{
        orders::models::{Order, OrderLine},
        users::models::User,
    },
    notifications::{
        mailer::{Mailer, OutboundEmail},
        templates::{self, ORDER_CONFIRMATION},
    },
};

const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Aggregate delivery outcome, recorded for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationOutcome {
    AllDelivered,
    Partial,
    NoneDelivered,
}

impl NotificationOutcome {
    /// Combine the registered-address attempt with the optional
    /// confirmation-address attempt. `None` means the confirmation address
    /// matched the registered one and no second send was made.
    #[must_use]
    pub fn from_attempts(registered: bool, confirmation: Option<bool>) -> Self {
        match (registered, confirmation) {
            (true, None | Some(true)) => Self::AllDelivered,
            (false, None | Some(false)) => Self::NoneDelivered,
            (true, Some(false)) | (false, Some(true)) => Self::Partial,
        }
    }
}

#[derive(Clone)]
pub struct NotificationDispatcher {
    mailer: Arc<dyn Mailer>,
    sender: String,
    attempt_timeout: Duration,
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("sender", &self.sender)
            .field("attempt_timeout", &self.attempt_timeout)
            .finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>, sender: String) -> Self {
        Self {
            mailer,
            sender,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Override the per-attempt time bound.
    #[must_use]
    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    /// Send the order confirmation to the owner's registered address, then
    /// to `confirmation_address` when it differs. Both attempts complete (or
    /// time out) before this returns.
    pub async fn send_order_confirmation(
        &self,
        owner: &User,
        order: &Order,
        lines: &[OrderLine],
        confirmation_address: &str,
    ) -> NotificationOutcome {
        let subject = format!("Order Confirmation - Order #{}", order.uuid);

        let body = match templates::render(ORDER_CONFIRMATION, &order_vars(owner, order, lines)) {
            Ok(body) => body,
            Err(error) => {
                warn!(order = %order.uuid, "failed to render order confirmation: {error}");

                return NotificationOutcome::NoneDelivered;
            }
        };

        let registered = self.attempt(&owner.email, &subject, &body).await;

        let confirmation = if confirmation_address == owner.email {
            None
        } else {
            Some(self.attempt(confirmation_address, &subject, &body).await)
        };

        NotificationOutcome::from_attempts(registered, confirmation)
    }

    async fn attempt(&self, to: &str, subject: &str, html_body: &str) -> bool {
        let email = OutboundEmail {
            to: to.to_string(),
            from: self.sender.clone(),
            reply_to: self.sender.clone(),
            subject: subject.to_string(),
            html_body: html_body.to_string(),
        };

        match timeout(self.attempt_timeout, self.mailer.send(&email)).await {
            Ok(Ok(())) => {
                info!(recipient = %to, "order confirmation handed off to mail provider");

                true
            }
            Ok(Err(error)) => {
                warn!(recipient = %to, "order confirmation send failed: {error}");

                false
            }
            Err(_elapsed) => {
                warn!(recipient = %to, "order confirmation send timed out");

                false
            }
        }
    }
}

fn order_vars(owner: &User, order: &Order, lines: &[OrderLine]) -> Map<String, Value> {
    let rows: String = lines
        .iter()
        .map(|line| {
            format!(
                "<tr><td>{}</td><td style=\"text-align: right;\">{}</td>\
                 <td style=\"text-align: right;\">{}</td></tr>",
                line.title,
                line.quantity,
                format_amount(line.unit_price)
            )
        })
        .collect();

    let mut vars = Map::new();

    vars.insert("name".to_string(), Value::String(owner.name.clone()));
    vars.insert("order_id".to_string(), Value::String(order.uuid.to_string()));
    vars.insert(
        "order_date".to_string(),
        Value::String(order.created_at.to_string()),
    );
    vars.insert("lines".to_string(), Value::String(rows));
    vars.insert(
        "total".to_string(),
        Value::String(format_amount(order.total_amount)),
    );

    vars
}

fn format_amount(minor_units: u64) -> String {
    format!("{}.{:02}", minor_units / 100, minor_units % 100)
}
