use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::waitlist::service::WaitlistServiceError;

pub const INVALID_EMAIL_MESSAGE: &str = "Valid email is required";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const WAITLIST_FAILURE_MESSAGE: &str = "Failed to add to waitlist. Please try again later.";

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn method_not_allowed() -> Self {
    Self::new(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    (self.status_code, Json(json!({ "error": self.message }))).into_response()
  }
}

impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    tracing::debug!("Rejected request body: {:?}", error);
    AppError::bad_request("Invalid JSON format")
  }
}

impl From<WaitlistServiceError> for AppError {
  fn from(error: WaitlistServiceError) -> Self {
    match error {
      WaitlistServiceError::ValidationError(msg) => {
        tracing::debug!("Rejected signup: {}", msg);
        AppError::bad_request(INVALID_EMAIL_MESSAGE)
      }
      WaitlistServiceError::AppendFailed(_) | WaitlistServiceError::InternalServerError(_) => {
        tracing::error!("Error adding to waitlist: {}", error);
        AppError::internal_server_error(WAITLIST_FAILURE_MESSAGE)
      }
    }
  }
}
