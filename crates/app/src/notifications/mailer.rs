//! Mail transport abstraction.

use async_trait::async_trait;
use mockall::automock;

use crate::notifications::http::MailApiError;

/// A single outbound message.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}

/// Errors reported by a mail transport.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("mail api error: {0}")]
    Api(#[from] MailApiError),
}

/// A transport that accepts a message and reports success or failure
/// synchronously. Delivery beyond hand-off is not guaranteed.
#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError>;
}
