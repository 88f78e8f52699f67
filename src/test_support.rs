use std::sync::Arc;

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Method, Request, StatusCode},
  Router,
};
use tower::ServiceExt;

use crate::{
  app::create_app,
  domains::waitlist::service::WaitlistService,
  email::{EmailError, EmailMessage, EmailSender},
  sheets::{SheetsError, SpreadsheetService},
  state::SharedAppState,
};

mockall::mock! {
  pub Spreadsheet {}

  #[async_trait]
  impl SpreadsheetService for Spreadsheet {
    async fn append_row(&self, row: Vec<String>) -> Result<(), SheetsError>;
  }
}

mockall::mock! {
  pub Mailer {}

  #[async_trait]
  impl EmailSender for Mailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), EmailError>;
  }
}

pub fn app_with_service<S: WaitlistService + 'static>(service: S) -> Router {
  create_app(SharedAppState::with_service(Arc::new(service)))
}

pub async fn send(app: Router, method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", "application/json")
    .body(body.into())
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}

pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> (StatusCode, HeaderMap, Bytes) {
  send(
    app,
    Method::POST,
    uri,
    serde_json::to_vec(body).expect("serialize request body"),
  )
  .await
}
