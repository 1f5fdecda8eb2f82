//! Scalar primitives over `f64`.
//!
//! Every function here is `#[inline(always)]`, allocation-free and pure.
//! The thin wrappers keep the backend's exact IEEE-754 semantics; the
//! composites (`interpolate`, `cubic_interpolate`, `median`) use nothing
//! but the same platform primitives.

#![allow(clippy::excessive_precision)]

mod angle;
mod interp;
mod order;
mod select;
mod tolerance;

pub use angle::{deg2rad, rad2deg};
pub use interp::{cubic_interpolate, interpolate};
pub use order::{max, median, min};
pub use select::{one, selector};
pub use tolerance::{ApproxEquals, approx_equals, approx_equals_within};

use super::platform::{self, DivRem};

/// Default tolerance of [`approx_equals`]: `sqrt(f64::MIN_POSITIVE)`.
pub const EPSILON: f64 = 1.491_668_146_240_041_348_658_193_063_09e-154;

pub const Ɛ: f64 = EPSILON;

/// `x * y + z` rounded once.
#[inline(always)]
pub fn fused_multiply_add(x: f64, y: f64, z: f64) -> f64 {
    platform::fma(x, y, z)
}

#[inline(always)]
pub fn abs(f: f64) -> f64 {
    platform::fabs(f)
}

/// Square root; NaN for negative inputs, `-0.0` for `-0.0`.
#[inline(always)]
pub fn sqrt(f: f64) -> f64 {
    platform::sqrt(f)
}

#[inline(always)]
pub fn cbrt(f: f64) -> f64 {
    platform::cbrt(f)
}

/// `x * 2^n` without forming `2^n` first.
#[inline(always)]
pub fn scale_b(x: f64, n: i32) -> f64 {
    platform::scalbn(x, n)
}

/// `(a / b, a % b)` with truncating division, for `i32` and `i64`.
///
/// # Panics
///
/// Panics when `b` is zero or when `a / b` overflows.
#[inline(always)]
pub fn div_rem<T: DivRem>(a: T, b: T) -> (T, T) {
    a.div_rem(b)
}
