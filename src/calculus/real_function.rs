//! Real-valued functions of one real variable.
//!
//! Every function that flows through the kernel (key functions,
//! character functions, their derivatives and products) implements
//! [`RealFunction`]. Closures get the implementation for free.

/// A function `f: R -> R`.
pub trait RealFunction {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> RealFunction for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// The default key function, `sin(2x) + cos(x)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultKey;

impl RealFunction for DefaultKey {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        (2.0 * x).sin() + x.cos()
    }
}
