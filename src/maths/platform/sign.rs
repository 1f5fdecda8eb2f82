//! Sign-bit helpers.
//!
//! Absolute value clears the sign bit, so `-0.0` maps to `+0.0` and NaN
//! payloads pass through untouched.

use super::{SIGN_MASK, f64_from_bits, f64_to_bits};

#[inline(always)]
pub fn fabs(x: f64) -> f64 {
    f64_from_bits(f64_to_bits(x) & !SIGN_MASK)
}

#[inline(always)]
pub fn signbit(x: f64) -> bool {
    (f64_to_bits(x) >> 63) != 0
}
