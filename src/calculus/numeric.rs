//! Numeric kernel: central-difference derivative and composite Simpson
//! integration.
//!
//! Both routines are pure and deterministic for a given function and
//! arguments. Neither guards against non-finite results; callers check
//! the values they care about.

use super::real_function::RealFunction;

/// Default step for [`derivative`].
pub const DEFAULT_STEP: f64 = 1e-7;

/// Default number of subintervals for [`integral`].
pub const DEFAULT_PARTITIONS: usize = 1000;

/// Estimates `f'(x)` with the central difference `(f(x+h) - f(x-h)) / 2h`.
///
/// No bounds checking is applied to `h`. Steps close to machine epsilon
/// are dominated by cancellation error.
///
/// # Examples
///
/// ```
/// use calculus_cipher::calculus::numeric::{derivative, DEFAULT_STEP};
///
/// let d = derivative(&|x: f64| x * x, 1.0, DEFAULT_STEP);
/// assert!((d - 2.0).abs() < 1e-5);
/// ```
#[inline]
pub fn derivative<F>(f: &F, x: f64, h: f64) -> f64
where
    F: RealFunction + ?Sized,
{
    (f.eval(x + h) - f.eval(x - h)) / (2.0 * h)
}

/// Rounds a requested subdivision count to the even partition Simpson's
/// rule needs.
///
/// Odd counts are incremented by one. Zero is treated as the smallest
/// valid partition, 2.
pub fn even_partitions(n: usize) -> usize {
    match n {
        0 => 2,
        n if !n.is_multiple_of(2) => n + 1,
        n => n,
    }
}

/// Integrates `f` over `[a, b]` with composite Simpson's rule on `n`
/// subintervals.
///
/// Samples `f` at `n + 1` equally spaced points. Endpoints are weighted
/// 1, odd-indexed interior samples 4 and even-indexed interior samples 2,
/// and the sum is scaled by `h / 3` with `h = (b - a) / n`. The count is
/// first normalised by [`even_partitions`].
///
/// Costs exactly `n + 1` evaluations of `f`.
///
/// # Examples
///
/// ```
/// use calculus_cipher::calculus::numeric::{integral, DEFAULT_PARTITIONS};
///
/// let area = integral(&|_x: f64| 1.0, 0.0, 1.0, DEFAULT_PARTITIONS);
/// assert!((area - 1.0).abs() < 1e-9);
/// ```
pub fn integral<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: RealFunction + ?Sized,
{
    let n = even_partitions(n);
    let h = (b - a) / n as f64;

    // Sample points follow a + i*h, except the right endpoint which is
    // pinned to b exactly.
    let sample = |i: usize| {
        let x = if i == n { b } else { a + i as f64 * h };
        f.eval(x)
    };

    let endpoints = sample(0) + sample(n);
    let mut odd_sum = 0.0;
    let mut even_sum = 0.0;
    for i in 1..n {
        if !i.is_multiple_of(2) {
            odd_sum += sample(i);
        } else {
            even_sum += sample(i);
        }
    }

    (endpoints + 4.0 * odd_sum + 2.0 * even_sum) * h / 3.0
}

/// The central-difference derivative of an inner function, as a value.
///
/// Evaluating it at `x` performs two evaluations of the inner function.
#[derive(Debug, Clone, Copy)]
pub struct DerivativeOf<'a, F: ?Sized> {
    inner: &'a F,
    step: f64,
}

impl<'a, F> DerivativeOf<'a, F>
where
    F: RealFunction + ?Sized,
{
    /// Wraps `inner` with the finite-difference step `step`.
    pub fn new(inner: &'a F, step: f64) -> Self {
        DerivativeOf { inner, step }
    }
}

impl<F> RealFunction for DerivativeOf<'_, F>
where
    F: RealFunction + ?Sized,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        derivative(self.inner, x, self.step)
    }
}
