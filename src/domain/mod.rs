//! Domain layer containing the shortener's core types.
//!
//! # Architecture
//!
//! - [`entities`] - Short codes and mappings
//! - [`code_generator`] - The trait behind short code generation
//!
//! The domain layer has no dependencies on the HTTP layer. The mapping store
//! itself lives in [`crate::application::services`].

pub mod code_generator;
pub mod entities;
