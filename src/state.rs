use std::sync::Arc;

use crate::config::Config;
use crate::store::Storage;

/// Shared application state available to all request handlers via Axum's `State` extractor.
///
/// The store is constructed once at process start and injected here; tests
/// build their own state around a fresh store instance.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub config: Config,
}
