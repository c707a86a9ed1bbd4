//! Core domain entities of the shortener.
//!
//! - [`ShortCode`] - Fixed-length identifier standing in for a full URL

pub mod short_code;

pub use short_code::{ALPHABET, SHORT_CODE_LENGTH, ShortCode};
