use std::any::Any;

use axum::{
  http::{header, Method},
  response::{IntoResponse, Json as JsonResponse, Response},
  routing::get,
  Router,
};
use serde_json::{json, Value};
use tower_http::{
  catch_panic::CatchPanicLayer,
  cors::{Any as AnyOrigin, CorsLayer},
};

use crate::{
  domains::waitlist::{rest::waitlist_routes, service::WaitlistServiceError},
  state::SharedAppState,
  AppError,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/health", get(health_check_handler))
    .nest("/api", waitlist_routes())
    .nest("/.netlify/functions", waitlist_routes())
    .layer(CatchPanicLayer::custom(handle_panic))
    .layer(cors_layer())
    .with_state(state)
}

pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(AnyOrigin)
    .allow_headers([header::CONTENT_TYPE])
    .allow_methods([Method::POST, Method::OPTIONS])
}

pub async fn health_check_handler() -> JsonResponse<Value> {
  JsonResponse(json!({ "status": "ok" }))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    s.to_string()
  } else {
    "unknown panic".to_string()
  };

  AppError::from(WaitlistServiceError::InternalServerError(detail)).into_response()
}
