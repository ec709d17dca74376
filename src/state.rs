//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::PageviewService;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pageview_service: Arc<PageviewService>,
    /// Upstream base URL, reported by the health endpoint.
    pub upstream_base_url: String,
}

impl AppState {
    pub fn new(pageview_service: Arc<PageviewService>, upstream_base_url: impl Into<String>) -> Self {
        Self {
            pageview_service,
            upstream_base_url: upstream_base_url.into(),
        }
    }
}
