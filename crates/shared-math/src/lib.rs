//! # Shared Math
//!
//! Small numeric utilities with no platform dependencies.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

/// Root mean square of a slice.
///
/// Returns NaN for an empty slice (the mean of nothing is 0/0), matching the
/// contract callers rely on.
#[must_use]
pub fn rms(xs: &[f64]) -> f64 {
    let sum_of_squares: f64 = xs.iter().map(|x| x * x).sum();
    (sum_of_squares / xs.len() as f64).sqrt()
}
