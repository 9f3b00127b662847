use std::sync::Arc;

use crate::config::Config;
use crate::jobs::mock::MockJobBoard;
use crate::jobs::JobSource;
use crate::llm_client::LlmClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub llm: LlmClient,
    pub config: Config,
    /// Live job board. `None` when Adzuna credentials are not configured.
    pub live_jobs: Option<Arc<dyn JobSource>>,
    /// Fallback board, always available.
    pub mock_jobs: MockJobBoard,
}

#[cfg(test)]
impl AppState {
    /// Offline state: no LLM key, no live job board.
    pub fn for_tests() -> Self {
        let config = Config::for_tests();
        let llm = LlmClient::new(config.groq_api_key.clone(), config.groq_model.clone())
            .expect("HTTP client builds");
        AppState {
            sessions: SessionStore::new(),
            llm,
            config,
            live_jobs: None,
            mock_jobs: MockJobBoard,
        }
    }
}
