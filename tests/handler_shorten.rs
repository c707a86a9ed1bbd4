mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use url_shortener::api::handlers::shorten_handler;
use url_shortener::domain::entities::{SHORT_CODE_LENGTH, ShortCode};

fn shorten_server() -> (TestServer, url_shortener::AppState) {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/", post(shorten_handler))
        .with_state(state.clone());

    (TestServer::new(app).unwrap(), state)
}

#[tokio::test]
async fn test_shorten_success() {
    let (server, state) = shorten_server();

    let response = server
        .post("/")
        .add_header("Host", common::TEST_HOST)
        .text("https://example.com")
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.header("content-type"), "text/plain");

    let short_url = response.text();
    let prefix = format!("http://{}/", common::TEST_HOST);
    assert!(short_url.starts_with(&prefix), "unexpected body {short_url}");

    let code = common::code_from_short_url(&short_url);
    assert_eq!(code.len(), SHORT_CODE_LENGTH);
    assert!(ShortCode::is_well_formed(&code));

    assert_eq!(state.store.resolve(&code).unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_shorten_same_url_twice_returns_same_short_url() {
    let (server, state) = shorten_server();

    let first = server
        .post("/")
        .add_header("Host", common::TEST_HOST)
        .text("https://example.com/page")
        .await;
    let second = server
        .post("/")
        .add_header("Host", common::TEST_HOST)
        .text("https://example.com/page")
        .await;

    assert_eq!(first.status_code(), 201);
    assert_eq!(second.status_code(), 201);
    assert_eq!(first.text(), second.text());
    assert_eq!(state.store.len(), 1);
}

#[tokio::test]
async fn test_shorten_uses_request_host() {
    let (server, _state) = shorten_server();

    let response = server
        .post("/")
        .add_header("Host", "sho.rt")
        .text("https://example.com")
        .await;

    assert_eq!(response.status_code(), 201);
    assert!(response.text().starts_with("http://sho.rt/"));
}

#[tokio::test]
async fn test_shorten_https_scheme_from_state() {
    let mut state = common::create_test_state();
    state.short_url_scheme = "https".to_string();
    let app = Router::new()
        .route("/", post(shorten_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/")
        .add_header("Host", "sho.rt")
        .text("https://example.com")
        .await;

    assert!(response.text().starts_with("https://sho.rt/"));
}

#[tokio::test]
async fn test_shorten_empty_body() {
    let (server, state) = shorten_server();

    let response = server
        .post("/")
        .add_header("Host", common::TEST_HOST)
        .text("")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "original URL is empty");
    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, state) = shorten_server();

    let response = server
        .post("/")
        .add_header("Host", common::TEST_HOST)
        .text("not-a-url")
        .await;

    assert_eq!(response.status_code(), 400);
    assert!(response.text().starts_with("invalid URL"));
    assert!(state.store.is_empty());
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_codes() {
    let (server, state) = shorten_server();

    let a = server
        .post("/")
        .add_header("Host", common::TEST_HOST)
        .text("https://a.example")
        .await
        .text();
    let b = server
        .post("/")
        .add_header("Host", common::TEST_HOST)
        .text("https://b.example")
        .await
        .text();

    assert_ne!(a, b);
    assert_eq!(state.store.len(), 2);
}
