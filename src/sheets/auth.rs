use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize, PartialEq)]
pub struct ServiceAccountClaims {
  pub iss: String,
  pub scope: String,
  pub aud: String,
  pub iat: i64,
  pub exp: i64,
}

impl ServiceAccountClaims {
  pub fn new(client_email: &str, token_uri: &str, issued_at: DateTime<Utc>) -> Self {
    let expires_at = issued_at + Duration::seconds(ASSERTION_LIFETIME_SECS);
    Self {
      iss: client_email.to_string(),
      scope: SPREADSHEETS_SCOPE.to_string(),
      aud: token_uri.to_string(),
      iat: issued_at.timestamp(),
      exp: expires_at.timestamp(),
    }
  }
}

/// Signs OAuth assertions for a Google service account. The PEM key is parsed once up front.
pub struct ServiceAccountSigner {
  client_email: String,
  key: EncodingKey,
}

impl ServiceAccountSigner {
  pub fn new(client_email: &str, private_key_pem: &str) -> Result<Self, jsonwebtoken::errors::Error> {
    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())?;
    Ok(Self {
      client_email: client_email.to_string(),
      key,
    })
  }

  pub fn client_email(&self) -> &str {
    &self.client_email
  }

  pub fn sign_assertion(&self, token_uri: &str, now: DateTime<Utc>) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = ServiceAccountClaims::new(&self.client_email, token_uri, now);
    encode(&Header::new(Algorithm::RS256), &claims, &self.key)
  }
}
