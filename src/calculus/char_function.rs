//! Character-to-function mapping.
//!
//! Each (character, position) pair defines a smooth real function
//!
//! ```text
//! base(c)   = ord(c) / 127
//! f_{c,i}(x) = base * sin(x + i) + base^2 * cos(2x) + exp(-x^2 / (2(i + 1)))
//! ```
//!
//! The encoder differentiates and integrates this function; nothing about
//! it is stored beyond the evaluation.

use super::real_function::RealFunction;

/// Normalisation divisor applied to the character ordinal.
const ORDINAL_SCALE: f64 = 127.0;

/// The continuous function attached to a character at a given position.
///
/// A plain value: constructing one is free and it holds no references.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharFunction {
    character: char,
    index: usize,
    base: f64,
}

impl CharFunction {
    /// Builds the function for `character` at position `index`.
    ///
    /// `index` is unsigned, so the Gaussian divisor `2(index + 1)` is
    /// always positive.
    pub fn new(character: char, index: usize) -> Self {
        CharFunction {
            character,
            index,
            base: character as u32 as f64 / ORDINAL_SCALE,
        }
    }

    /// Returns the character this function encodes.
    pub fn character(&self) -> char {
        self.character
    }

    /// Returns the position index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the normalised ordinal, `ord(c) / 127`.
    pub fn base(&self) -> f64 {
        self.base
    }
}

impl RealFunction for CharFunction {
    fn eval(&self, x: f64) -> f64 {
        let index = self.index as f64;
        let term1 = self.base * (x + index).sin();
        let term2 = self.base.powi(2) * (2.0 * x).cos();
        let term3 = (-x.powi(2) / (2.0 * (index + 1.0))).exp();
        term1 + term2 + term3
    }
}
