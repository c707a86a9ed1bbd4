//! Validation of original URLs submitted for shortening.
//!
//! The submitted string is checked, never rewritten: the store keys mappings by
//! the exact input, so `https://example.com` and `https://example.com/` are
//! different URLs with different codes.

use url::Url;

use crate::error::StoreError;

/// Checks that `input` is a non-empty absolute URL.
///
/// # Rules
///
/// - Must not be empty
/// - Must not contain control characters (the URL is later sent back verbatim
///   in a `Location` header)
/// - Must parse as an absolute URL, i.e. carry a scheme
///
/// # Errors
///
/// Returns [`StoreError::EmptyUrl`] for an empty input and
/// [`StoreError::InvalidUrl`] for anything else that fails a rule.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_original_url("https://example.com").is_ok());
/// assert!(validate_original_url("not-a-url").is_err());
/// ```
pub fn validate_original_url(input: &str) -> Result<(), StoreError> {
    if input.is_empty() {
        return Err(StoreError::EmptyUrl);
    }

    if input.chars().any(char::is_control) {
        return Err(StoreError::invalid_url("URL contains control characters"));
    }

    Url::parse(input).map_err(|e| StoreError::invalid_url(e.to_string()))?;

    Ok(())
}
