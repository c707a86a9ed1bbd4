//! # URL Shortener
//!
//! A small URL shortening service keeping a bidirectional mapping between
//! absolute URLs and 8-character codes, in memory, for the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short codes, mappings, and the generator trait
//! - **Application Layer** ([`application`]) - The [`MappingStore`]
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Protocol
//!
//! - `POST /` with the raw URL as body answers `201` and the short URL as plain text
//! - `GET /{code}` answers `307` with `Location` set to the original URL
//! - Invalid input answers `400` with a plain-text message
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"   # Optional
//! cargo run
//!
//! curl -d 'https://example.com' http://localhost:8080/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::MappingStore;
pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::MappingStore;
    pub use crate::domain::code_generator::CodeGenerator;
    pub use crate::domain::entities::{ALPHABET, SHORT_CODE_LENGTH, ShortCode};
    pub use crate::error::{AppError, RandomnessError, StoreError};
    pub use crate::state::AppState;
}
