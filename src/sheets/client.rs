use async_trait::async_trait;
use chrono::Utc;
use reqwest::Url;
use serde_json::json;

use super::auth::{ServiceAccountSigner, JWT_BEARER_GRANT};
use super::types::{AppendResponse, SheetsConfig, SheetsError, TokenResponse};
use super::SpreadsheetService;

const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

pub struct GoogleSheetsClient {
  config: SheetsConfig,
  signer: ServiceAccountSigner,
  http: reqwest::Client,
}

impl GoogleSheetsClient {
  pub fn new(config: SheetsConfig) -> anyhow::Result<Self> {
    let signer = ServiceAccountSigner::new(&config.service_account_email, &config.private_key)
      .map_err(|e| anyhow::anyhow!("Invalid GOOGLE_PRIVATE_KEY: {}", e))?;
    let http = reqwest::Client::builder().user_agent("waitlist-api").build()?;

    Ok(Self { config, signer, http })
  }

  pub fn append_url(&self) -> Result<Url, SheetsError> {
    let mut url = Url::parse(&self.config.api_base_url)
      .map_err(|e| SheetsError::Request(format!("Invalid Sheets API URL: {}", e)))?;
    let append_segment = format!("{}:append", self.config.range);

    url
      .path_segments_mut()
      .map_err(|_| SheetsError::Request("Sheets API URL cannot be a base".to_string()))?
      .pop_if_empty()
      .extend([
        "v4",
        "spreadsheets",
        self.config.spreadsheet_id.as_str(),
        "values",
        append_segment.as_str(),
      ]);
    url.query_pairs_mut().append_pair("valueInputOption", VALUE_INPUT_OPTION);

    Ok(url)
  }

  async fn fetch_access_token(&self) -> Result<String, SheetsError> {
    let assertion = self
      .signer
      .sign_assertion(&self.config.token_uri, Utc::now())
      .map_err(|e| SheetsError::Auth(format!("Failed to sign assertion: {}", e)))?;

    let response = self
      .http
      .post(&self.config.token_uri)
      .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
      .send()
      .await
      .map_err(|e| SheetsError::Auth(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let message = response.text().await.unwrap_or_default();
      return Err(SheetsError::Auth(format!("token endpoint returned {}: {}", status, message)));
    }

    let token: TokenResponse = response
      .json()
      .await
      .map_err(|e| SheetsError::Auth(format!("Malformed token response: {}", e)))?;
    tracing::debug!(
      "Obtained access token for {} (expires in {:?}s)",
      self.signer.client_email(),
      token.expires_in
    );

    Ok(token.access_token)
  }
}

#[async_trait]
impl SpreadsheetService for GoogleSheetsClient {
  async fn append_row(&self, row: Vec<String>) -> Result<(), SheetsError> {
    let access_token = self.fetch_access_token().await?;
    let url = self.append_url()?;

    let response = self
      .http
      .post(url)
      .bearer_auth(access_token)
      .json(&json!({ "values": [row] }))
      .send()
      .await
      .map_err(|e| SheetsError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      let message = response.text().await.unwrap_or_default();
      return Err(SheetsError::Api {
        status: status.as_u16(),
        message,
      });
    }

    if let Ok(AppendResponse {
      updates: Some(updates),
    }) = response.json::<AppendResponse>().await
    {
      tracing::debug!("Appended row to {:?}", updates.updated_range);
    }

    Ok(())
  }
}
