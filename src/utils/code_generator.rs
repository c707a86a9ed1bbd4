//! Short code generation backed by the operating system's CSPRNG.
//!
//! Characters are drawn by rejection sampling over raw random bytes, so every
//! alphabet character is equally likely.

use crate::domain::code_generator::CodeGenerator;
use crate::domain::entities::{ALPHABET, ShortCode};
use crate::error::RandomnessError;

/// Bytes at or above this value are discarded.
///
/// 248 is the largest multiple of 62 that fits in a byte, so `b % 62` over
/// `0..248` hits each alphabet index exactly four times.
const REJECTION_THRESHOLD: u8 = (u8::MAX / ALPHABET.len() as u8) * ALPHABET.len() as u8;

/// Random bytes requested from the source per refill.
const BATCH_SIZE: usize = 16;

/// Generates short codes from `getrandom`.
///
/// # Examples
///
/// ```ignore
/// let code = SecureCodeGenerator.generate(8)?;
/// assert_eq!(code.as_str().len(), 8);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureCodeGenerator;

impl SecureCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for SecureCodeGenerator {
    fn generate(&self, length: usize) -> Result<ShortCode, RandomnessError> {
        generate_with(length, |buffer| {
            getrandom::fill(buffer).map_err(|e| RandomnessError::new(e.to_string()))
        })
    }
}

/// Builds a code of `length` characters from bytes supplied by `fill`.
fn generate_with<F>(length: usize, mut fill: F) -> Result<ShortCode, RandomnessError>
where
    F: FnMut(&mut [u8]) -> Result<(), RandomnessError>,
{
    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; BATCH_SIZE];

    while code.len() < length {
        fill(&mut buffer)?;

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_THRESHOLD) {
            code.push(ALPHABET[usize::from(byte) % ALPHABET.len()] as char);
            if code.len() == length {
                break;
            }
        }
    }

    Ok(ShortCode::new(code))
}
