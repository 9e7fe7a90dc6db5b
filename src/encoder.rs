//! Forward transform: one ciphertext value per plaintext character.
//!
//! For a character `c` at position `i` with key function `g`:
//!
//! ```text
//! E_i(c) = integral_{-1}^{1} f'_{c,i}(x) * g(x + i) dx + e^(i mod 3) + pi * (i mod 2)
//! ```
//!
//! where `f_{c,i}` is the [`CharFunction`], the derivative is the
//! central difference and the integral is composite Simpson.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::calculus::char_function::CharFunction;
use crate::calculus::numeric::{integral, DerivativeOf};
use crate::calculus::real_function::RealFunction;
use crate::config::CipherConfig;
use crate::constants::obfuscation_constant;
use crate::error::{CipherError, CipherResult};

/// Ordinals of the characters that can round-trip.
pub const PRINTABLE_ORDINALS: RangeInclusive<u32> = 32..=126;

/// Returns true if `c` lies in the printable ASCII range 32..=126.
pub fn is_printable(c: char) -> bool {
    PRINTABLE_ORDINALS.contains(&(c as u32))
}

/// Iterates the 95 printable characters in ascending ordinal order.
pub fn printable_chars() -> impl Iterator<Item = char> + Clone {
    PRINTABLE_ORDINALS.filter_map(char::from_u32)
}

/// Integrand of the forward transform: `f'_{c,i}(x) * g(x + i)`.
struct KeyedDerivative<'a, K: ?Sized> {
    derivative: DerivativeOf<'a, CharFunction>,
    key: &'a K,
    shift: f64,
}

impl<K> RealFunction for KeyedDerivative<'_, K>
where
    K: RealFunction + ?Sized,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.derivative.eval(x) * self.key.eval(x + self.shift)
    }
}

/// Computes the ciphertext value without checking the character range.
///
/// The decoder calls this for its candidate set, which is printable by
/// construction.
pub(crate) fn forward_value<K>(key: &K, config: &CipherConfig, character: char, index: usize) -> f64
where
    K: RealFunction + ?Sized,
{
    let char_fn = CharFunction::new(character, index);
    let integrand = KeyedDerivative {
        derivative: DerivativeOf::new(&char_fn, config.derivative_step),
        key,
        shift: index as f64,
    };
    let area = integral(
        &integrand,
        config.domain_start,
        config.domain_end,
        config.partitions,
    );
    area + obfuscation_constant(index)
}

/// Encrypts a single character at position `index`.
///
/// # Errors
/// - [`CipherError::InvalidCharacter`] if `character` is not printable ASCII.
/// - [`CipherError::NonFinite`] if the key or character function produced
///   NaN or an infinity.
///
/// # Examples
///
/// ```
/// use calculus_cipher::{encoder, CipherConfig, DefaultKey};
///
/// let config = CipherConfig::default();
/// let h0 = encoder::encrypt_character(&DefaultKey, &config, 'H', 0).unwrap();
/// let h1 = encoder::encrypt_character(&DefaultKey, &config, 'H', 1).unwrap();
/// assert_ne!(h0, h1);
/// ```
pub fn encrypt_character<K>(
    key: &K,
    config: &CipherConfig,
    character: char,
    index: usize,
) -> CipherResult<f64>
where
    K: RealFunction + ?Sized,
{
    if !is_printable(character) {
        return Err(CipherError::InvalidCharacter { character, index });
    }
    let value = forward_value(key, config, character, index);
    if !value.is_finite() {
        return Err(CipherError::NonFinite {
            stage: "encryption",
            index,
        });
    }
    Ok(value)
}

/// Encrypts `text` position by position.
///
/// The output has one value per character, in order. The whole text is
/// rejected if any character is out of range.
pub fn encrypt<K>(key: &K, config: &CipherConfig, text: &str) -> CipherResult<Vec<f64>>
where
    K: RealFunction + ?Sized,
{
    debug!(chars = text.chars().count(), "encrypting text");
    let ciphertext = text
        .chars()
        .enumerate()
        .map(|(index, character)| encrypt_character(key, config, character, index))
        .collect::<CipherResult<Vec<f64>>>()?;
    debug!(values = ciphertext.len(), "encryption complete");
    Ok(ciphertext)
}
