use async_trait::async_trait;
use chrono::Utc;
use std::error::Error;

use super::model::{JoinOutcome, SignupRequest, WaitlistEntry};
use crate::{
  email::{templates::welcome_email, EmailSender},
  sheets::SpreadsheetService,
  utils::validate_email,
};

#[derive(Debug)]
pub enum WaitlistServiceError {
  ValidationError(String),
  AppendFailed(String),
  InternalServerError(String),
}

impl Error for WaitlistServiceError {}

impl std::fmt::Display for WaitlistServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      WaitlistServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      WaitlistServiceError::AppendFailed(msg) => write!(f, "Append Failed: {}", msg),
      WaitlistServiceError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait WaitlistService: Send + Sync {
  async fn join_waitlist(&self, req: SignupRequest) -> Result<JoinOutcome, WaitlistServiceError>;
}

pub struct WaitlistServiceImpl<S, M> {
  spreadsheet: S,
  mailer: M,
}

impl<S, M> WaitlistServiceImpl<S, M>
where
  S: SpreadsheetService,
  M: EmailSender,
{
  pub fn new(spreadsheet: S, mailer: M) -> Self {
    Self { spreadsheet, mailer }
  }

  /// Returns whether the provider accepted the welcome email. Failures are logged, never raised.
  async fn send_welcome_email(&self, recipient: &str) -> bool {
    match self.mailer.send(&welcome_email(recipient)).await {
      Ok(()) => {
        tracing::info!("Welcome email dispatched");
        true
      }
      Err(e) => {
        tracing::error!("Failed to send welcome email: {}", e);
        false
      }
    }
  }
}

#[async_trait]
impl<S, M> WaitlistService for WaitlistServiceImpl<S, M>
where
  S: SpreadsheetService,
  M: EmailSender,
{
  async fn join_waitlist(&self, req: SignupRequest) -> Result<JoinOutcome, WaitlistServiceError> {
    let email = req.email.unwrap_or_default();
    validate_email(&email).map_err(|e| WaitlistServiceError::ValidationError(format!("Validation failed: {}", e.code)))?;

    let entry = WaitlistEntry::new(email, Utc::now());

    self
      .spreadsheet
      .append_row(entry.to_row())
      .await
      .map_err(|e| WaitlistServiceError::AppendFailed(format!("Failed to append waitlist row: {}", e)))?;
    tracing::info!("Waitlist signup recorded at {}", entry.timestamp());

    let email_sent = self.send_welcome_email(&entry.email).await;

    Ok(JoinOutcome { email_sent })
  }
}
