use std::sync::Arc;

use crate::analysis::classifier::{GapClassifier, NearestNeighborClassifier};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill-gap classifier. Default: NearestNeighborClassifier.
    pub classifier: Arc<dyn GapClassifier>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            classifier: Arc::new(NearestNeighborClassifier::default()),
        }
    }
}
