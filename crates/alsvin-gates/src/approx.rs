//! Epsilon rules for complex arithmetic.
//!
//! Exact floating-point equality is never meaningful for unitarity or
//! normalization checks; every such comparison in the workspace goes
//! through the thresholds defined here.

use num_complex::Complex64;

/// Tolerance for construction-time checks (unitarity, normalization).
pub const EPSILON: f64 = 1e-9;

/// Tolerance for the post-application norm check.
///
/// Looser than [`EPSILON`]: floating-point error accumulates across a
/// chain of operator applications, while construction sees a single
/// matrix product.
pub const DRIFT_EPSILON: f64 = 1e-6;

/// Complex equality within [`EPSILON`], on the modulus of the difference.
#[inline]
pub fn approx_eq(a: Complex64, b: Complex64) -> bool {
    (a - b).norm() < EPSILON
}

/// True if `x` is within `eps` of 1.0.
///
/// A NaN norm compares false here, so non-finite amplitudes are rejected
/// by the same check that catches ordinary drift.
#[inline]
pub fn approx_one(x: f64, eps: f64) -> bool {
    (x - 1.0).abs() < eps
}
