#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use url_shortener::application::services::MappingStore;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;

pub const TEST_HOST: &str = "localhost:8080";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(MappingStore::new()), "http")
}

pub fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(app_router(state.clone())).unwrap();
    (server, state)
}

/// Splits `http://host/code` into its code.
pub fn code_from_short_url(short_url: &str) -> String {
    short_url
        .rsplit('/')
        .next()
        .expect("short URL has a path")
        .to_string()
}
