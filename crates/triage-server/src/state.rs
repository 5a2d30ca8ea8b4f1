//! Shared application state.

use std::sync::Arc;

use tracing::info;
use triage_classify::Classifier;
use triage_core::{Result, TriageConfig};

/// Read-only state shared by all request handlers.
pub struct AppState {
    pub config: TriageConfig,
    pub classifier: Classifier,
}

impl AppState {
    pub fn new(config: TriageConfig, classifier: Classifier) -> Self {
        Self { config, classifier }
    }

    /// Load the model and build the phrase index. Blocking; run before the
    /// listener is bound.
    pub fn load(config: TriageConfig) -> Result<Self> {
        let model = triage_infer::create_model(&config)?;
        let classifier = Classifier::from_config(&config, model)?;
        info!(
            "Classifier ready: {} phrases, similarity fallback {}",
            classifier.index().phrases().len(),
            if classifier.has_fallback() { "on" } else { "off" }
        );
        Ok(Self::new(config, classifier))
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
