//! Platform numeric runtime.
//!
//! Everything the scalar surface composes lives here: sign masking, NaN
//! tests, exact power-of-two scaling, integer division with remainder, and
//! the backend-provided `sqrt`, `cbrt` and `fma`. The backend is `std` by
//! default and the `libm` crate when built with `--no-default-features
//! --features libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("fastscalar needs a float backend: enable the `std` or the `libm` feature");

mod backend;
mod classify;
mod divrem;
mod scaling;
mod sign;

pub use backend::{cbrt, fma, sqrt};
pub use classify::{are_any_nan, isnan};
pub use divrem::DivRem;
pub use scaling::scalbn;
pub use sign::{fabs, signbit};

pub(crate) const SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;

// ========= bit helpers =========

#[inline(always)]
pub(crate) fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}

#[inline(always)]
pub(crate) fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}

/// 2^n for n in the normal exponent range [-1022, 1023].
#[inline(always)]
pub(crate) fn pow2_normal(n: i32) -> f64 {
    f64_from_bits(((0x3ff + n) as u64) << 52)
}
