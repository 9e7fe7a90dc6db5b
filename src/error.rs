//! Error types for the calculus cipher.

use thiserror::Error;

/// Errors produced by the calculus cipher.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CipherError {
    /// Plaintext character outside the printable range (ordinal 32..=126).
    ///
    /// Such characters would encode, but the decoder can never select them,
    /// so they are rejected up front.
    #[error("character {character:?} (U+{:04X}) at index {index} is outside the printable range 32..=126", codepoint(.character))]
    InvalidCharacter { character: char, index: usize },

    /// A NaN or infinite value appeared in the computation or in the input.
    #[error("non-finite value in {stage} at index {index}")]
    NonFinite { stage: &'static str, index: usize },

    /// Configuration failed validation or could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Named mathematical constant is not in the constants table.
    #[error("unknown constant: {0}")]
    UnknownConstant(String),
}

fn codepoint(c: &char) -> u32 {
    *c as u32
}

/// Result alias used throughout the crate.
pub type CipherResult<T> = Result<T, CipherError>;
