use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Present only when `OPENAI_API_KEY` was set. Handlers that need the
    /// model report a configuration error when this is `None`.
    pub llm: Option<LlmClient>,
}
