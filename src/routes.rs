//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /`        - Create a short URL
//! - `GET  /{*code}` - Short link redirect
//! - `GET  /health`  - Health check
//!
//! Every route is wrapped in the request tracing middleware.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::shortener_routes())
        .with_state(state)
        .layer(tracing::layer())
}
