use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::{EmailError, EmailMessage, ResendConfig};
use super::EmailSender;

#[derive(Serialize)]
struct SendEmailRequest<'a> {
  from: &'a str,
  to: &'a [String],
  subject: &'a str,
  html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
  id: Option<String>,
}

#[derive(Deserialize, Default)]
struct ResendErrorBody {
  name: Option<String>,
  message: Option<String>,
}

/// Thin client over Resend's `POST /emails`.
pub struct ResendClient {
  config: ResendConfig,
  http: reqwest::Client,
}

impl ResendClient {
  pub fn new(config: ResendConfig) -> anyhow::Result<Self> {
    let http = reqwest::Client::builder().user_agent("waitlist-api").build()?;
    Ok(Self { config, http })
  }

  fn endpoint(&self) -> String {
    format!("{}/emails", self.config.api_base_url.trim_end_matches('/'))
  }
}

#[async_trait]
impl EmailSender for ResendClient {
  async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
    let payload = SendEmailRequest {
      from: &self.config.from_email,
      to: &message.to,
      subject: &message.subject,
      html: &message.html,
    };

    let response = self
      .http
      .post(self.endpoint())
      .bearer_auth(&self.config.api_key)
      .json(&payload)
      .send()
      .await
      .map_err(|e| EmailError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let body: ResendErrorBody = response.json().await.unwrap_or_default();
      return Err(EmailError::Provider {
        status: status.as_u16(),
        name: body.name.unwrap_or_else(|| "unknown_error".to_string()),
        message: body.message.unwrap_or_else(|| status.to_string()),
      });
    }

    match response.json::<SendEmailResponse>().await {
      Ok(SendEmailResponse { id: Some(id) }) => tracing::debug!("Resend accepted message {}", id),
      _ => tracing::debug!("Resend accepted message without an id"),
    }

    Ok(())
  }
}
