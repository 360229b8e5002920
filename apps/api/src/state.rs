use std::sync::Arc;

use crate::analysis::pipeline::Analyzer;
use crate::config::Config;
use crate::narrative::NarrativeProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; every request builds its own vocabulary.
    pub analyzer: Arc<Analyzer>,
    /// LLM narrative backend. `None` when `ANTHROPIC_API_KEY` is unset.
    pub narrator: Option<Arc<dyn NarrativeProvider>>,
}

impl AppState {
    pub fn new(config: Config, narrator: Option<Arc<dyn NarrativeProvider>>) -> Self {
        let analyzer = Arc::new(Analyzer::new(&config.analysis));
        Self {
            config,
            analyzer,
            narrator,
        }
    }
}
