//! Outbound email
//!
//! Messages go out either through the Resend HTTP API or over SMTP with lettre.
//! Both transports sit behind [`EmailSender`] so the waitlist flow never knows which one is configured.

mod resend;
mod smtp;
pub mod templates;
mod types;

use async_trait::async_trait;

pub use resend::ResendClient;
pub use smtp::SmtpMailer;
pub use types::{EmailConfig, EmailError, EmailMessage, ResendConfig, SmtpConfig, DEFAULT_FROM_EMAIL};

#[async_trait]
pub trait EmailSender: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
}

pub enum Mailer {
  Resend(ResendClient),
  Smtp(SmtpMailer),
}

impl Mailer {
  pub fn from_config(config: EmailConfig) -> anyhow::Result<Self> {
    let mailer = match config {
      EmailConfig::Resend(config) => Mailer::Resend(ResendClient::new(config)?),
      EmailConfig::Smtp(config) => Mailer::Smtp(SmtpMailer::new(config)?),
    };
    Ok(mailer)
  }
}

#[async_trait]
impl EmailSender for Mailer {
  async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
    match self {
      Mailer::Resend(client) => client.send(message).await,
      Mailer::Smtp(mailer) => mailer.send(message).await,
    }
  }
}
