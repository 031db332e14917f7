//! Outbound Mail
//!
//! Delivery is behind the [`Mailer`] seam. [`HttpMailer`] posts messages to an
//! HTTP mail relay authenticated with the configured SMTP account;
//! [`LogMailer`] only records that a message would have been sent.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    /// Relay could not be reached
    #[error("Mail relay request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Relay answered with a non-success status
    #[error("Mail relay rejected message with status {0}")]
    Rejected(u16),
}

/// A single HTML message
#[derive(Clone)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl fmt::Debug for OutgoingMail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bodies may carry credentials
        f.debug_struct("OutgoingMail")
            .field("to", &self.to)
            .field("subject", &self.subject)
            .field("html", &"[REDACTED]")
            .finish()
    }
}

/// Mail delivery seam
#[trait_variant::make(Mailer: Send)]
pub trait LocalMailer {
    /// Deliver one message
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}

/// Account used to authenticate against the relay
#[derive(Clone)]
pub struct MailCredentials {
    pub user: String,
    pub password: String,
}

impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize)]
struct RelayMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

/// Mailer backed by an HTTP mail relay
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    relay_url: String,
    credentials: MailCredentials,
}

impl HttpMailer {
    pub fn new(relay_url: impl Into<String>, credentials: MailCredentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            relay_url: relay_url.into(),
            credentials,
        }
    }
}

impl Mailer for HttpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        let message = RelayMessage {
            from: &self.credentials.user,
            to: &mail.to,
            subject: &mail.subject,
            html: &mail.html,
        };

        let response = self
            .client
            .post(&self.relay_url)
            .basic_auth(&self.credentials.user, Some(&self.credentials.password))
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MailError::Rejected(response.status().as_u16()));
        }

        tracing::info!(to = %mail.to, subject = %mail.subject, "Email sent");
        Ok(())
    }
}

/// Mailer that only logs recipient and subject
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError> {
        tracing::info!(
            to = %mail.to,
            subject = %mail.subject,
            "Mail relay not configured, message not delivered"
        );
        Ok(())
    }
}
