use std::sync::Arc;

use crate::jobs::repository::JobRepository;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend selected by `LLM_PROVIDER`.
    pub llm: Arc<dyn CompletionProvider>,
    pub jobs: Arc<dyn JobRepository>,
}
