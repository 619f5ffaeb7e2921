use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::GenerationOptions;
use crate::llm_client::CoverLetterWriter;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; no state is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Remote writer. `None` means local mode for every request.
    pub writer: Option<Arc<dyn CoverLetterWriter>>,
}

impl AppState {
    pub fn generation_options(&self) -> GenerationOptions {
        self.config.generation_options()
    }
}
