use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Default: `OpenAiClient`. Tests swap in a stub.
    pub gateway: Arc<dyn CompletionGateway>,
    pub config: Config,
}
