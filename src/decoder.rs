//! Inverse transform by exhaustive search.
//!
//! The forward transform has no closed-form inverse. Each ciphertext
//! value is decoded by re-encoding all 95 printable characters at the
//! same position and keeping the one whose encoding lies closest to the
//! value (absolute difference, first minimum in ascending ordinal order).
//!
//! Positions are independent, so with `parallel_decode` enabled they are
//! searched on the rayon pool and reassembled in order.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::calculus::real_function::RealFunction;
use crate::config::CipherConfig;
use crate::encoder::{forward_value, printable_chars};
use crate::error::{CipherError, CipherResult};
use crate::search::{absolute_error, nearest_match};

/// Residual below which a decoded position counts as an exact match.
pub const EXACT_MATCH_TOLERANCE: f64 = 1e-9;

/// A decoded character and the residual of its search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecodedChar {
    /// Best-matching printable character.
    pub character: char,
    /// Absolute difference between the ciphertext value and the
    /// character's re-encoding.
    pub error: f64,
}

/// Decodes a single value and reports the search residual.
///
/// The candidate encodings and the ciphertext value both carry the
/// position's obfuscation constant, so they are compared directly.
///
/// # Errors
/// - [`CipherError::NonFinite`] with stage `"ciphertext"` if `value` is NaN
///   or infinite.
/// - [`CipherError::NonFinite`] with stage `"decryption"` if re-encoding a
///   candidate produced a non-finite value.
pub fn decrypt_character_detailed<K>(
    key: &K,
    config: &CipherConfig,
    value: f64,
    index: usize,
) -> CipherResult<DecodedChar>
where
    K: RealFunction + ?Sized,
{
    if !value.is_finite() {
        return Err(CipherError::NonFinite {
            stage: "ciphertext",
            index,
        });
    }

    let search = nearest_match(printable_chars(), |&candidate| {
        let encoded = forward_value(key, config, candidate, index);
        if !encoded.is_finite() {
            return Err(CipherError::NonFinite {
                stage: "decryption",
                index,
            });
        }
        Ok(absolute_error(value, encoded))
    })?;
    // The printable set always holds 95 candidates.
    let Some(best) = search else {
        unreachable!("printable candidate set is empty");
    };

    trace!(index, character = %best.candidate, error = best.score, "decoded position");
    if best.score > EXACT_MATCH_TOLERANCE {
        warn!(
            index,
            character = %best.candidate,
            error = best.score,
            "no exact match, returning closest candidate"
        );
    }

    Ok(DecodedChar {
        character: best.candidate,
        error: best.score,
    })
}

/// Decodes a single value at position `index`.
///
/// # Examples
///
/// ```
/// use calculus_cipher::{decoder, encoder, CipherConfig, DefaultKey};
///
/// let config = CipherConfig::default();
/// let v = encoder::encrypt_character(&DefaultKey, &config, 'R', 3).unwrap();
/// assert_eq!(decoder::decrypt_character(&DefaultKey, &config, v, 3).unwrap(), 'R');
/// ```
pub fn decrypt_character<K>(
    key: &K,
    config: &CipherConfig,
    value: f64,
    index: usize,
) -> CipherResult<char>
where
    K: RealFunction + ?Sized,
{
    decrypt_character_detailed(key, config, value, index).map(|d| d.character)
}

/// Decodes every position and reports the per-position residuals.
pub fn decrypt_detailed<K>(
    key: &K,
    config: &CipherConfig,
    ciphertext: &[f64],
) -> CipherResult<Vec<DecodedChar>>
where
    K: RealFunction + Sync + ?Sized,
{
    debug!(
        values = ciphertext.len(),
        parallel = config.parallel_decode,
        "decrypting ciphertext"
    );
    let decoded = if config.parallel_decode {
        ciphertext
            .par_iter()
            .enumerate()
            .map(|(index, &value)| decrypt_character_detailed(key, config, value, index))
            .collect::<CipherResult<Vec<DecodedChar>>>()?
    } else {
        ciphertext
            .iter()
            .enumerate()
            .map(|(index, &value)| decrypt_character_detailed(key, config, value, index))
            .collect::<CipherResult<Vec<DecodedChar>>>()?
    };
    debug!(chars = decoded.len(), "decryption complete");
    Ok(decoded)
}

/// Decodes a ciphertext back into text of the same length.
///
/// A wrong character is silently possible wherever two candidates encode
/// to nearly the same value at that position; use [`decrypt_detailed`]
/// to inspect residuals.
pub fn decrypt<K>(key: &K, config: &CipherConfig, ciphertext: &[f64]) -> CipherResult<String>
where
    K: RealFunction + Sync + ?Sized,
{
    let decoded = decrypt_detailed(key, config, ciphertext)?;
    Ok(decoded.into_iter().map(|d| d.character).collect())
}
