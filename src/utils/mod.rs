//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Secure short code generation
//! - [`url_validator`] - Original URL validation
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod code_generator;
pub mod extract_host;
pub mod url_validator;
