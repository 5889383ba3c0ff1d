use std::sync::Arc;

use crate::advisor::CareerAdvisor;
use crate::assessment::catalog::CareerCatalog;
use crate::config::Config;
use crate::feedback::store::FeedbackStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup; shared across requests without locking.
    pub catalog: Arc<CareerCatalog>,
    /// `None` when no LLM key is configured. Advisor routes then answer 503.
    pub advisor: Option<Arc<dyn CareerAdvisor>>,
    pub feedback: Arc<FeedbackStore>,
}
