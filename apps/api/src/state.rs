use std::sync::Arc;

use crate::config::Config;
use crate::ranking::Ranker;

/// Shared application state injected into all route handlers via Axum
/// extractors. Holds no mutable ranking state — every request recomputes
/// from its own uploads.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ranking backend. Default: TfidfRanker.
    pub ranker: Arc<dyn Ranker>,
}
