use std::sync::Arc;

use pseudoloc_core::Transformer;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The transformer's tables are immutable after startup, so clones share one
/// engine across requests with no locking.
#[derive(Clone)]
pub struct AppState {
    pub transformer: Arc<Transformer>,
    pub config: Config,
}
