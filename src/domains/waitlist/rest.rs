use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{SignupRequest, SignupResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn waitlist_routes() -> Router<SharedAppState> {
  Router::new().route(
    "/waitlist",
    post(join_waitlist_handler).fallback(method_not_allowed_handler),
  )
}

pub async fn join_waitlist_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<SignupResponse>, AppError> {
  let request = SignupRequest::from_json(&body)?;
  let outcome = state.join_waitlist(request).await?;
  Ok(JsonResponse(SignupResponse::joined(outcome)))
}

pub async fn method_not_allowed_handler() -> AppError {
  AppError::method_not_allowed()
}
