//! Shortener route configuration.

use crate::api::handlers::{redirect_handler, redirect_root_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Create and resolve routes.
///
/// # Endpoints
///
/// - `POST /`        - Shorten the URL sent as the raw request body
/// - `GET  /{*code}` - Temporary redirect to the original URL; the whole path
///   after the leading `/` is the code
/// - `GET  /`        - Empty code, always 400
pub fn shortener_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(shorten_handler).get(redirect_root_handler))
        .route("/{*code}", get(redirect_handler))
}
