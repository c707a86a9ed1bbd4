mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_shortener::api::handlers::{redirect_handler, redirect_root_handler};

fn redirect_server() -> (TestServer, url_shortener::AppState) {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/", get(redirect_root_handler))
        .route("/{*code}", get(redirect_handler))
        .with_state(state.clone());

    (TestServer::new(app).unwrap(), state)
}

#[tokio::test]
async fn test_redirect_success() {
    let (server, state) = redirect_server();
    let code = state.store.save("https://example.com/target").unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_keeps_query_string_of_original() {
    let (server, state) = redirect_server();
    let original = "https://example.com/search?q=rust&page=2";
    let code = state.store.save(original).unwrap();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), original);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _state) = redirect_server();

    let response = server.get("/zzzzzzzz").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "short URL does not exist");
}

#[tokio::test]
async fn test_redirect_empty_code() {
    let (server, _state) = redirect_server();

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "short URL is empty");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, state) = redirect_server();
    let code = state.store.save("https://example.com").unwrap();

    let flipped: String = code
        .as_str()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();

    // All-digit codes have no case to flip.
    if flipped != code.as_str() {
        let response = server.get(&format!("/{flipped}")).await;
        assert_eq!(response.status_code(), 400);
    }
}

#[tokio::test]
async fn test_redirect_nested_path_is_unknown_code() {
    let (server, _state) = redirect_server();

    let response = server.get("/a/b").await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "short URL does not exist");
}

#[tokio::test]
async fn test_redirect_trailing_slash_is_unknown_code() {
    let (server, state) = redirect_server();
    let code = state.store.save("https://example.com").unwrap();

    let response = server.get(&format!("/{code}/")).await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "short URL does not exist");
}
