use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The provider client is the only cross-request resource and is read-only
/// after startup. It is carried as `Arc<dyn TextGenerator>` so tests can
/// substitute a canned or failing provider without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn TextGenerator>,
}
