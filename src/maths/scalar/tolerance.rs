//! Tolerance comparison.
//!
//! The comparison is `|a - b| - allowed_error > 0`: it answers whether `a`
//! and `b` are further apart than the tolerance. Identical values therefore
//! give `false`, and so does any NaN operand.

use super::EPSILON;
use crate::maths::platform::fabs;

#[inline(always)]
pub fn approx_equals(a: f64, b: f64) -> bool {
    approx_equals_within(a, b, EPSILON)
}

#[inline(always)]
pub fn approx_equals_within(a: f64, b: f64, allowed_error: f64) -> bool {
    fabs(a - b) - allowed_error > 0.0
}

/// Method form of [`approx_equals`] and [`approx_equals_within`].
pub trait ApproxEquals {
    fn approx_equals(self, other: Self) -> bool;
    fn approx_equals_within(self, other: Self, allowed_error: Self) -> bool;
}

impl ApproxEquals for f64 {
    #[inline(always)]
    fn approx_equals(self, other: f64) -> bool {
        approx_equals(self, other)
    }

    #[inline(always)]
    fn approx_equals_within(self, other: f64, allowed_error: f64) -> bool {
        approx_equals_within(self, other, allowed_error)
    }
}
