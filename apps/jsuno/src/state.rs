use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` in degraded mode (no API key resolved at startup).
    pub llm: Option<Arc<dyn TextGenerator>>,
    pub sessions: SessionStore,
    pub config: Config,
}

impl AppState {
    pub fn new(llm: Option<Arc<dyn TextGenerator>>, config: Config) -> Self {
        Self {
            llm,
            sessions: SessionStore::new(config.session_ttl_secs),
            config,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.llm.is_none()
    }

    /// The model client, or `MissingCredential` in degraded mode.
    pub fn llm(&self) -> Result<&dyn TextGenerator, AppError> {
        self.llm.as_deref().ok_or(AppError::MissingCredential)
    }
}
