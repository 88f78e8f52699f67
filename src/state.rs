use std::sync::Arc;

use crate::{
  config::Settings,
  domains::waitlist::{
    model::{JoinOutcome, SignupRequest},
    service::{WaitlistService, WaitlistServiceError, WaitlistServiceImpl},
  },
  email::Mailer,
  sheets::GoogleSheetsClient,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn join_waitlist(
    &self,
    req: SignupRequest,
  ) -> impl std::future::Future<Output = Result<JoinOutcome, WaitlistServiceError>> + Send;
}

/// Process-wide handles, built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct SharedAppState {
  pub waitlist_service: Arc<dyn WaitlistService>,
}

impl SharedAppState {
  pub fn new(settings: &Settings) -> anyhow::Result<Self> {
    let spreadsheet = GoogleSheetsClient::new(settings.sheets.clone())?;
    let mailer = Mailer::from_config(settings.email.clone())?;
    let waitlist_service = WaitlistServiceImpl::new(spreadsheet, mailer);

    Ok(Self::with_service(Arc::new(waitlist_service)))
  }

  pub fn with_service(waitlist_service: Arc<dyn WaitlistService>) -> Self {
    Self { waitlist_service }
  }
}

impl AppState for SharedAppState {
  async fn join_waitlist(&self, req: SignupRequest) -> Result<JoinOutcome, WaitlistServiceError> {
    self.waitlist_service.join_waitlist(req).await
  }
}
