use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::utils::iso_timestamp;

pub const JOINED_MESSAGE: &str = "Successfully added to waitlist";

/// Signup form payload. `email` is `None` when absent or not a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupRequest {
  pub email: Option<String>,
}

impl SignupRequest {
  pub fn new(email: impl Into<String>) -> Self {
    Self {
      email: Some(email.into()),
    }
  }

  /// Parses a raw request body. Only malformed JSON is an error; any well-formed
  /// document is accepted and simply yields no email if it lacks a string `email` field.
  pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
    let value: Value = serde_json::from_slice(body)?;
    let email = value.get("email").and_then(Value::as_str).map(str::to_string);
    Ok(Self { email })
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEntry {
  pub email: String,
  pub signed_up_at: DateTime<Utc>,
}

impl WaitlistEntry {
  pub fn new(email: String, signed_up_at: DateTime<Utc>) -> Self {
    Self { email, signed_up_at }
  }

  pub fn timestamp(&self) -> String {
    iso_timestamp(self.signed_up_at)
  }

  pub fn to_row(&self) -> Vec<String> {
    vec![self.email.clone(), self.timestamp()]
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
  pub email_sent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
  pub success: bool,
  pub message: String,
  pub email_sent: bool,
}

impl SignupResponse {
  pub fn joined(outcome: JoinOutcome) -> Self {
    Self {
      success: true,
      message: JOINED_MESSAGE.to_string(),
      email_sent: outcome.email_sent,
    }
  }
}
