//! Google Sheets append support, authenticated as a service account.

mod auth;
mod client;
mod types;

use async_trait::async_trait;

pub use auth::{ServiceAccountClaims, ServiceAccountSigner, JWT_BEARER_GRANT, SPREADSHEETS_SCOPE};
pub use client::GoogleSheetsClient;
pub use types::{SheetsConfig, SheetsError, DEFAULT_RANGE, DEFAULT_SHEETS_API_URL, DEFAULT_TOKEN_URI};

#[async_trait]
pub trait SpreadsheetService: Send + Sync {
  /// Appends one row after the last filled row of the configured range.
  async fn append_row(&self, row: Vec<String>) -> Result<(), SheetsError>;
}
