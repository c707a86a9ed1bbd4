//! Bidirectional URL <-> short code store.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::code_generator::CodeGenerator;
use crate::domain::entities::{SHORT_CODE_LENGTH, ShortCode};
use crate::error::StoreError;
use crate::utils::code_generator::SecureCodeGenerator;
use crate::utils::url_validator::validate_original_url;

/// Both lookup directions, always mutated together.
///
/// Invariant: `forward[url] == code` if and only if `backward[code] == url`.
#[derive(Debug, Default)]
struct Mappings {
    forward: HashMap<String, ShortCode>,
    backward: HashMap<ShortCode, String>,
}

impl Mappings {
    /// The only mutation path. Callers must have checked that neither key is present.
    fn insert(&mut self, original_url: &str, code: &ShortCode) {
        debug_assert!(!self.forward.contains_key(original_url));
        debug_assert!(!self.backward.contains_key(code));

        self.forward.insert(original_url.to_owned(), code.clone());
        self.backward.insert(code.clone(), original_url.to_owned());
    }
}

/// Volatile, process-lifetime store of URL mappings.
///
/// Handles URL validation, idempotent saves, and collision-free code
/// assignment. Safe to share between threads behind an `Arc`.
///
/// # Concurrency
///
/// A single reader/writer lock covers both directions. Lookups share the
/// read lock. Candidate codes are generated with no lock held and pre-checked
/// under the read lock; the final check of both directions and the insertion
/// happen together under the write lock.
pub struct MappingStore<G: CodeGenerator = SecureCodeGenerator> {
    mappings: RwLock<Mappings>,
    generator: G,
}

impl MappingStore {
    /// Creates an empty store backed by the OS random source.
    pub fn new() -> Self {
        Self::with_generator(SecureCodeGenerator::new())
    }
}

impl Default for MappingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: CodeGenerator> MappingStore<G> {
    /// Creates an empty store drawing candidate codes from `generator`.
    pub fn with_generator(generator: G) -> Self {
        Self {
            mappings: RwLock::new(Mappings::default()),
            generator,
        }
    }

    /// Returns the short code for `original_url`, creating one on first use.
    ///
    /// Saving the same string again returns the code assigned the first time.
    /// The raw string is the identity: no normalization is applied.
    ///
    /// # Collisions
    ///
    /// There is no retry cap. With 62^8 possible codes a second attempt is
    /// already rare, and exhaustion is not a practical concern.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyUrl`] if `original_url` is empty
    /// - [`StoreError::InvalidUrl`] if it is not an absolute URL
    /// - [`StoreError::Randomness`] if the code generator fails; nothing is stored
    pub fn save(&self, original_url: &str) -> Result<ShortCode, StoreError> {
        validate_original_url(original_url)?;

        if let Some(code) = self.mappings.read().forward.get(original_url) {
            return Ok(code.clone());
        }

        loop {
            let candidate = self.generator.generate(SHORT_CODE_LENGTH)?;

            if self.mappings.read().backward.contains_key(&candidate) {
                continue;
            }

            let mut mappings = self.mappings.write();

            // A concurrent save of the same URL may have won the race.
            if let Some(code) = mappings.forward.get(original_url) {
                return Ok(code.clone());
            }

            // Or a concurrent save of another URL claimed this candidate.
            if mappings.backward.contains_key(&candidate) {
                continue;
            }

            mappings.insert(original_url, &candidate);
            return Ok(candidate);
        }
    }

    /// Returns the original URL assigned `code`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::EmptyCode`] if `code` is empty
    /// - [`StoreError::NotFound`] if no mapping uses `code`
    pub fn resolve(&self, code: &str) -> Result<String, StoreError> {
        if code.is_empty() {
            return Err(StoreError::EmptyCode);
        }

        self.mappings
            .read()
            .backward
            .get(code)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.mappings.read().forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
