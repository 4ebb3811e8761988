use ats_core::AtsEngine;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Keyword backend + lexicon, selected once at startup.
    pub engine: AtsEngine,
}
