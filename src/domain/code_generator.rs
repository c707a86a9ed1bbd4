//! Code generator trait.

use crate::domain::entities::ShortCode;
use crate::error::RandomnessError;

/// Source of candidate short codes.
///
/// Implementations must be thread-safe: the mapping store calls `generate`
/// concurrently from every writer without holding its lock.
///
/// # Implementations
///
/// - [`crate::utils::code_generator::SecureCodeGenerator`] - OS CSPRNG backed generator
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a code of `length` characters drawn uniformly from
    /// [`crate::domain::entities::ALPHABET`].
    ///
    /// # Errors
    ///
    /// Returns [`RandomnessError`] if the random source is unavailable. The
    /// generator never retries on its own.
    fn generate(&self, length: usize) -> Result<ShortCode, RandomnessError>;
}
