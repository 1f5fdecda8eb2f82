//! sqrt, cbrt and fma from the selected backend.
//!
//! `std` wins when both features are enabled. Both backends are correctly
//! rounded for sqrt and fma; cbrt is faithful (within 1 ulp).

#[cfg(feature = "std")]
mod imp {
    #[inline(always)]
    pub fn sqrt(x: f64) -> f64 {
        f64::sqrt(x)
    }

    #[inline(always)]
    pub fn cbrt(x: f64) -> f64 {
        f64::cbrt(x)
    }

    #[inline(always)]
    pub fn fma(x: f64, y: f64, z: f64) -> f64 {
        f64::mul_add(x, y, z)
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod imp {
    #[inline(always)]
    pub fn sqrt(x: f64) -> f64 {
        libm::sqrt(x)
    }

    #[inline(always)]
    pub fn cbrt(x: f64) -> f64 {
        libm::cbrt(x)
    }

    #[inline(always)]
    pub fn fma(x: f64, y: f64, z: f64) -> f64 {
        libm::fma(x, y, z)
    }
}

#[cfg(any(feature = "std", feature = "libm"))]
pub use imp::{cbrt, fma, sqrt};
