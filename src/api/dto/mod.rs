//! Data Transfer Objects for API responses.
//!
//! Create and resolve speak plain text and redirects; only the health
//! endpoint returns JSON.

pub mod health;
