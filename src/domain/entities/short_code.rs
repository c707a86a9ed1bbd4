//! Short code value type.

use std::borrow::Borrow;
use std::fmt;

/// Number of characters in every issued short code.
pub const SHORT_CODE_LENGTH: usize = 8;

/// Characters a short code is drawn from: `a-z`, `A-Z`, then `0-9`.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// An immutable short code assigned to exactly one original URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wraps an already generated code.
    ///
    /// Callers are expected to pass alphabet characters only; the store does not
    /// re-validate codes coming from a [`crate::domain::code_generator::CodeGenerator`].
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `code` has the issued length and only alphabet characters.
    pub fn is_well_formed(code: &str) -> bool {
        code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<ShortCode, _>` be probed with a plain `&str`.
impl Borrow<str> for ShortCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
