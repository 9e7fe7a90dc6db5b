//! Named mathematical constants and the per-position obfuscation term.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::{CipherError, CipherResult};

/// Euler's number.
pub const EULER: f64 = std::f64::consts::E;

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// The golden ratio, `(1 + sqrt 5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618033988749895;

/// Square root of two.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Square root of three.
pub const SQRT_3: f64 = 1.7320508075688772;

/// Process-wide table of the named constants, keyed by name.
static CONSTANTS: Lazy<BTreeMap<&'static str, f64>> = Lazy::new(|| {
    BTreeMap::from([
        ("euler", EULER),
        ("pi", PI),
        ("golden_ratio", GOLDEN_RATIO),
        ("sqrt_2", SQRT_2),
        ("sqrt_3", SQRT_3),
    ])
});

/// Returns the read-only table of named constants.
pub fn table() -> &'static BTreeMap<&'static str, f64> {
    &CONSTANTS
}

/// Looks up a constant by name.
///
/// # Errors
/// Returns [`CipherError::UnknownConstant`] if `name` is not in the table.
///
/// # Examples
///
/// ```
/// use calculus_cipher::constants;
///
/// assert_eq!(constants::lookup("pi").unwrap(), std::f64::consts::PI);
/// assert!(constants::lookup("tau").is_err());
/// ```
pub fn lookup(name: &str) -> CipherResult<f64> {
    CONSTANTS
        .get(name)
        .copied()
        .ok_or_else(|| CipherError::UnknownConstant(name.to_string()))
}

/// Additive term mixed into the ciphertext at position `index`:
/// `e^(index mod 3) + pi * (index mod 2)`.
///
/// Cycles with period 6.
pub fn obfuscation_constant(index: usize) -> f64 {
    EULER.powi((index % 3) as i32) + PI * (index % 2) as f64
}
