//! Application layer.
//!
//! Holds [`services::MappingStore`], the component that validates input,
//! assigns short codes, and keeps the URL/code bijection consistent. HTTP
//! handlers call into it through [`crate::state::AppState`].

pub mod services;
