// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tolerance-aware comparisons for layout arithmetic.
//!
//! Layout positions accumulate rounding error across passes, so equality and
//! ordering checks on main-axis coordinates go through these helpers instead of
//! raw `==`/`<`.

/// Tolerance used by every comparison in this module.
pub const EPSILON: f64 = 0.001;

/// Returns `true` if `value` is within [`EPSILON`] of zero.
#[inline]
#[must_use]
pub fn near_zero(value: f64) -> bool {
    value.abs() <= EPSILON
}

/// Returns `true` if `a` and `b` differ by at most [`EPSILON`].
#[inline]
#[must_use]
pub fn near_equal(a: f64, b: f64) -> bool {
    near_zero(a - b)
}

/// `a <= b`, treating values within [`EPSILON`] as equal.
#[inline]
#[must_use]
pub fn less_or_equal(a: f64, b: f64) -> bool {
    a - b <= EPSILON
}

/// `a < b` and not within [`EPSILON`] of each other.
#[inline]
#[must_use]
pub fn less_not_equal(a: f64, b: f64) -> bool {
    b - a > EPSILON
}

/// `a >= b`, treating values within [`EPSILON`] as equal.
#[inline]
#[must_use]
pub fn great_or_equal(a: f64, b: f64) -> bool {
    a - b > -EPSILON
}

/// `a > b` and not within [`EPSILON`] of each other.
#[inline]
#[must_use]
pub fn great_not_equal(a: f64, b: f64) -> bool {
    a - b > EPSILON
}

/// `value >= 0`, tolerating tiny negative noise.
#[inline]
#[must_use]
pub fn non_negative(value: f64) -> bool {
    great_or_equal(value, 0.0)
}

/// `value > 0` beyond the tolerance.
#[inline]
#[must_use]
pub fn positive(value: f64) -> bool {
    great_not_equal(value, 0.0)
}

/// `value < 0` beyond the tolerance.
#[inline]
#[must_use]
pub fn negative(value: f64) -> bool {
    less_not_equal(value, 0.0)
}
