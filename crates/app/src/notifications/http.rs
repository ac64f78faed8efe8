//! HTTP client for the mail provider's send API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use crate::notifications::mailer::{Mailer, MailerError, OutboundEmail};

/// Configuration for the mail provider.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Provider API base, e.g. `"https://api.sendgrid.com"`.
    pub api_base: String,

    /// Bearer API key.
    pub api_key: String,

    /// Sender address, also used as the reply-to.
    pub sender: String,
}

/// HTTP transport posting messages to a SendGrid-compatible send endpoint.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    config: MailConfig,
    http: Client,
}

impl HttpMailer {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        let url = format!("{}/v3/mail/send", self.config.api_base);

        let body = json!({
            "personalizations": [{ "to": [{ "email": email.to }] }],
            "from": { "email": email.from },
            "reply_to": { "email": email.reply_to },
            "subject": email.subject,
            "content": [{ "type": "text/html", "value": email.html_body }],
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(MailApiError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(MailerError::Api(MailApiError::UnexpectedResponse(format!(
                "send request failed with status {status}: {text}"
            ))));
        }

        Ok(())
    }
}

/// Errors that can occur when talking to the mail provider.
#[derive(Debug, Error)]
pub enum MailApiError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-2xx response.
    #[error("unexpected response from mail provider: {0}")]
    UnexpectedResponse(String),
}
