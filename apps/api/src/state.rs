use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::export::raster::PreviewRegistry;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no API key is configured; AI endpoints then answer 503.
    pub generator: Option<Arc<dyn TextGenerator>>,
    /// Rendered previews uploaded by the browser, the source of PDF exports.
    pub previews: PreviewRegistry,
}

impl AppState {
    pub fn new(config: Config, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            config,
            generator,
            previews: PreviewRegistry::new(),
        }
    }

    pub fn generator(&self) -> Result<&dyn TextGenerator, AppError> {
        self.generator.as_deref().ok_or(AppError::MissingApiKey)
    }
}

#[cfg(test)]
pub fn test_state(generator: Option<Arc<dyn TextGenerator>>) -> AppState {
    AppState::new(
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            gemini_api_key: generator.as_ref().map(|_| "test-key".to_string()),
            gemini_model: "gemini-test".to_string(),
            max_preview_bytes: 1024 * 1024,
        },
        generator,
    )
}
