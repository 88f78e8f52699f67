use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::types::{EmailError, EmailMessage, SmtpConfig};
use super::EmailSender;

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig) -> anyhow::Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }

  fn build_message(&self, recipient: &str, message: &EmailMessage) -> Result<Message, EmailError> {
    let from: Mailbox = self
      .smtp_config
      .from_email
      .parse()
      .map_err(|e| EmailError::InvalidAddress(format!("{}: {}", self.smtp_config.from_email, e)))?;
    let to: Mailbox = recipient
      .parse()
      .map_err(|e| EmailError::InvalidAddress(format!("{}: {}", recipient, e)))?;

    Message::builder()
      .from(from)
      .to(to)
      .subject(&message.subject)
      .header(ContentType::TEXT_HTML)
      .body(message.html.clone())
      .map_err(|e| EmailError::Transport(format!("Failed to build message: {}", e)))
  }
}

#[async_trait]
impl EmailSender for SmtpMailer {
  async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
    for recipient in &message.to {
      let email = self.build_message(recipient, message)?;
      self
        .transporter
        .send(email)
        .await
        .map_err(|e| EmailError::Transport(e.to_string()))?;
    }

    Ok(())
  }
}
