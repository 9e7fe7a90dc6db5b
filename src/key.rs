//! Key material helpers.
//!
//! The session key itself is any [`RealFunction`](crate::RealFunction);
//! this module adds the deterministic numeric key sequence derived from a
//! named base constant.

use crate::constants::{self, EULER};

/// Generates `n` key values from a named base constant.
///
/// For `i = 1..=n` the value is `base^(i mod 5) * sqrt(i) + (-1)^i / (i + 1)`,
/// rounded to six decimal places. Unknown constant names fall back to
/// Euler's number.
///
/// # Examples
///
/// ```
/// use calculus_cipher::key::key_sequence;
///
/// let seq = key_sequence(3, "pi");
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq, key_sequence(3, "pi"));
/// ```
pub fn key_sequence(n: usize, base_constant: &str) -> Vec<f64> {
    let base = constants::lookup(base_constant).unwrap_or(EULER);
    (1..=n)
        .map(|i| {
            let sign = if i.is_multiple_of(2) { 1.0 } else { -1.0 };
            let value = base.powi((i % 5) as i32) * (i as f64).sqrt() + sign / (i as f64 + 1.0);
            round6(value)
        })
        .collect()
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
