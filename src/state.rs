//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::MappingStore;

/// State shared by every request.
///
/// The store is owned here rather than living in a global, so each test can
/// build a fresh, isolated instance.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MappingStore>,
    /// Scheme of the short URLs handed out by the create endpoint.
    pub short_url_scheme: String,
}

impl AppState {
    pub fn new(store: Arc<MappingStore>, short_url_scheme: impl Into<String>) -> Self {
        Self {
            store,
            short_url_scheme: short_url_scheme.into(),
        }
    }

    /// Builds the full short URL served at `host` for `code`.
    pub fn short_url(&self, host: &str, code: &str) -> String {
        format!("{}://{}/{}", self.short_url_scheme, host, code)
    }
}
