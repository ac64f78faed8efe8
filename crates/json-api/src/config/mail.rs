//! Mail Provider Config

use clap::Args;

/// Mail provider settings.
#[derive(Debug, Args)]
pub struct MailProviderConfig {
    /// Mail provider API base URL
    #[arg(long, env = "MAIL_API_BASE", default_value = "https://api.sendgrid.com")]
    pub api_base: String,

    /// Mail provider API key
    #[arg(long, env = "MAIL_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Sender address for outbound mail
    #[arg(long, env = "MAIL_SENDER")]
    pub sender: String,
}
