use std::error::Error;

pub const DEFAULT_FROM_EMAIL: &str = "ELARO <onboarding@resend.dev>";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

#[derive(Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

impl std::fmt::Debug for SmtpConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SmtpConfig")
      .field("host", &self.host)
      .field("port", &self.port)
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .field("from_email", &self.from_email)
      .finish()
  }
}

#[derive(Clone)]
pub struct ResendConfig {
  pub api_key: String,
  pub from_email: String,
  pub api_base_url: String,
}

impl ResendConfig {
  pub fn new(api_key: impl Into<String>) -> Self {
    ResendConfig {
      api_key: api_key.into(),
      from_email: DEFAULT_FROM_EMAIL.to_string(),
      api_base_url: DEFAULT_RESEND_API_URL.to_string(),
    }
  }
}

impl std::fmt::Debug for ResendConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ResendConfig")
      .field("api_key", &"<redacted>")
      .field("from_email", &self.from_email)
      .field("api_base_url", &self.api_base_url)
      .finish()
  }
}

#[derive(Debug, Clone)]
pub enum EmailConfig {
  Resend(ResendConfig),
  Smtp(SmtpConfig),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
  pub to: Vec<String>,
  pub subject: String,
  pub html: String,
}

impl EmailMessage {
  pub fn new(to: Vec<String>, subject: String, html: String) -> Self {
    EmailMessage { to, subject, html }
  }
}

/// Failure reported by an email provider. Callers treat it as a value, not a reason to abort.
#[derive(Debug, Clone, PartialEq)]
pub enum EmailError {
  InvalidAddress(String),
  Transport(String),
  Provider { status: u16, name: String, message: String },
}

impl Error for EmailError {}

impl std::fmt::Display for EmailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
      EmailError::Transport(msg) => write!(f, "Transport error: {}", msg),
      EmailError::Provider { status, name, message } => {
        write!(f, "Provider rejected message ({} {}): {}", status, name, message)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_debug_redacts_resend_api_key() {
    let rendered = format!("{:?}", ResendConfig::new("re_live_secret"));
    assert!(!rendered.contains("re_live_secret"));
    assert!(rendered.contains("<redacted>"));
  }

  #[test]
  fn test_debug_redacts_smtp_password() {
    let config = SmtpConfig {
      password: "hunter2".to_string(),
      ..SmtpConfig::default()
    };
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
  }
}
