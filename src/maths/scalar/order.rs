//! NaN-propagating min/max and the median built on them.
//!
//! Unlike `f64::min`/`f64::max`, a NaN on either side yields NaN, and signed
//! zeros are ordered (`-0.0 < +0.0`).

use crate::maths::platform::{are_any_nan, f64_from_bits, f64_to_bits};

#[inline(always)]
pub fn min(a: f64, b: f64) -> f64 {
    if are_any_nan(a, b) {
        return a + b;
    }
    if a == b {
        // equal values differ at most in the sign of zero; OR keeps -0.0
        return f64_from_bits(f64_to_bits(a) | f64_to_bits(b));
    }
    if a < b { a } else { b }
}

#[inline(always)]
pub fn max(a: f64, b: f64) -> f64 {
    if are_any_nan(a, b) {
        return a + b;
    }
    if a == b {
        return f64_from_bits(f64_to_bits(a) & f64_to_bits(b));
    }
    if a > b { a } else { b }
}

/// Middle value of three, from nested min/max only.
#[inline(always)]
pub fn median(a: f64, b: f64, c: f64) -> f64 {
    max(min(a, b), min(max(a, b), c))
}
