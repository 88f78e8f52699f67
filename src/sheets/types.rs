use serde::Deserialize;
use std::error::Error;

pub const DEFAULT_RANGE: &str = "Sheet1!A:B";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

#[derive(Clone)]
pub struct SheetsConfig {
  pub spreadsheet_id: String,
  pub range: String,
  pub service_account_email: String,
  pub private_key: String,
  pub token_uri: String,
  pub api_base_url: String,
}

impl std::fmt::Debug for SheetsConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SheetsConfig")
      .field("spreadsheet_id", &self.spreadsheet_id)
      .field("range", &self.range)
      .field("service_account_email", &self.service_account_email)
      .field("private_key", &"<redacted>")
      .field("token_uri", &self.token_uri)
      .field("api_base_url", &self.api_base_url)
      .finish()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SheetsError {
  Auth(String),
  Request(String),
  Api { status: u16, message: String },
}

impl Error for SheetsError {}

impl std::fmt::Display for SheetsError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SheetsError::Auth(msg) => write!(f, "Authentication failed: {}", msg),
      SheetsError::Request(msg) => write!(f, "Request failed: {}", msg),
      SheetsError::Api { status, message } => write!(f, "Sheets API returned {}: {}", status, message),
    }
  }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
  pub access_token: String,
  pub expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppendResponse {
  pub updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppendUpdates {
  pub updated_range: Option<String>,
}
