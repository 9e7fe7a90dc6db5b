//! Static formula text and descriptive analysis for display layers.
//!
//! Everything here is a fixed lookup. The strings are consumed verbatim
//! by renderers, so they must not change. The security summary is the
//! scheme's self-description, not a measurement.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Returned by [`latex_formula`] for unknown categories or names.
pub const FORMULA_NOT_FOUND: &str = "Formula not found";

const ENCRYPTION_FORMULA: &str = r"E_i(c) = \int_{-1}^{1} \frac{d}{dx}[f_c(x)] \cdot g(x + i) dx + e^{i \bmod 3} + \pi \cdot (i \bmod 2)";

type FormulaTable = BTreeMap<&'static str, &'static str>;

static ENCRYPTION_FORMULAS: Lazy<FormulaTable> = Lazy::new(|| {
    BTreeMap::from([
        ("basic_encryption", r"E(x) = \int_0^x f'(t) \cdot g(t) \, dt + C"),
        (
            "advanced_encryption",
            r"E(x) = \sum_{n=0}^{\infty} \frac{(-1)^n}{(2n)!} \left(\frac{d^n f}{dx^n}\right) \cdot g^{(n)}(x)",
        ),
        (
            "key_generation",
            r"K(x) = e^{-x^2/2} \cdot \prod_{k=1}^{n} \left(1 + \frac{x^k}{k!}\right)",
        ),
        (
            "security_measure",
            r"S = \lim_{n \to \infty} \left|\frac{\partial^n E}{\partial x^n}\right| \cdot \left|\frac{\partial^n K}{\partial x^n}\right|",
        ),
    ])
});

static DECRYPTION_FORMULAS: Lazy<FormulaTable> = Lazy::new(|| {
    BTreeMap::from([
        ("basic_decryption", r"D(y) = \frac{d}{dx}\left[\frac{y - C}{g(x)}\right]"),
        (
            "inverse_transform",
            r"D(y) = \mathcal{L}^{-1}\left\{\frac{Y(s) - C/s}{G(s)}\right\}",
        ),
        (
            "series_expansion",
            r"D(y) = \sum_{n=1}^{\infty} \frac{(-1)^{n+1}}{n} \left(\frac{y - C}{g(x)}\right)^n",
        ),
    ])
});

static COMPLEXITY_FORMULAS: Lazy<FormulaTable> = Lazy::new(|| {
    BTreeMap::from([
        (
            "time_complexity",
            r"T(n) = O\left(n \cdot \log n \cdot \sum_{k=1}^{n} \frac{1}{k!}\right)",
        ),
        (
            "space_complexity",
            r"S(n) = O\left(n^2 \cdot \int_0^n e^{-t^2} dt\right)",
        ),
        (
            "security_strength",
            r"\text{Strength} = 2^{\sum_{i=1}^{n} \lfloor \log_2(f_i!) \rfloor}",
        ),
    ])
});

/// Groups of display formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaCategory {
    Encryption,
    Decryption,
    Complexity,
}

impl FormulaCategory {
    /// All categories in display order.
    pub const ALL: [FormulaCategory; 3] = [
        FormulaCategory::Encryption,
        FormulaCategory::Decryption,
        FormulaCategory::Complexity,
    ];

    /// Parses a lowercase category name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "encryption" => Some(FormulaCategory::Encryption),
            "decryption" => Some(FormulaCategory::Decryption),
            "complexity" => Some(FormulaCategory::Complexity),
            _ => None,
        }
    }

    /// Returns the lowercase category name.
    pub fn name(&self) -> &'static str {
        match self {
            FormulaCategory::Encryption => "encryption",
            FormulaCategory::Decryption => "decryption",
            FormulaCategory::Complexity => "complexity",
        }
    }

    /// Returns the formula table for this category.
    pub fn formulas(&self) -> &'static BTreeMap<&'static str, &'static str> {
        match self {
            FormulaCategory::Encryption => &ENCRYPTION_FORMULAS,
            FormulaCategory::Decryption => &DECRYPTION_FORMULAS,
            FormulaCategory::Complexity => &COMPLEXITY_FORMULAS,
        }
    }
}

impl fmt::Display for FormulaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The per-character encryption formula in LaTeX.
pub fn encryption_formula() -> &'static str {
    ENCRYPTION_FORMULA
}

/// Looks up a LaTeX formula by category and name.
///
/// Returns [`FORMULA_NOT_FOUND`] if either is unknown.
///
/// # Examples
///
/// ```
/// use calculus_cipher::descriptor::{latex_formula, FORMULA_NOT_FOUND};
///
/// assert!(latex_formula("decryption", "basic_decryption").starts_with("D(y)"));
/// assert_eq!(latex_formula("decryption", "nope"), FORMULA_NOT_FOUND);
/// ```
pub fn latex_formula(category: &str, name: &str) -> &'static str {
    FormulaCategory::from_name(category)
        .and_then(|c| c.formulas().get(name).copied())
        .unwrap_or(FORMULA_NOT_FOUND)
}

/// The scheme's descriptive security summary for a text of a given length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityAnalysis {
    /// Key space label, `2^{64 * length}`.
    pub key_space: String,
    /// Asymptotic cost label.
    pub complexity: &'static str,
    /// Operations the transform is built from.
    pub mathematical_operations: [&'static str; 3],
    /// The scheme's own strength claim.
    pub security_level: &'static str,
}

impl SecurityAnalysis {
    /// Serializes the summary as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Builds the descriptive security summary for `text_length` characters.
///
/// The key space label assumes 64 bits per ciphertext value.
pub fn security_analysis(text_length: usize) -> SecurityAnalysis {
    SecurityAnalysis {
        key_space: format!("2^{}", text_length as u128 * 64),
        complexity: "O(n * log(n))",
        mathematical_operations: [
            "differentiation",
            "integration",
            "transcendental_functions",
        ],
        security_level: "High (based on calculus complexity)",
    }
}
