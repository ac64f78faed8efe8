//! Transactional email: transport, templates, and the confirmation
//! dispatcher.

pub mod dispatcher;
pub mod http;
pub mod mailer;
pub mod templates;

pub use dispatcher::{NotificationDispatcher, NotificationOutcome};
pub use http::{HttpMailer, MailConfig};
pub use mailer::{Mailer, MailerError, OutboundEmail};
