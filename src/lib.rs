#![no_std]
#![allow(uncommon_codepoints)]

//! Branchless, forced-inline scalar primitives over `f64`.
//!
//! The flat surface at the crate root is [`maths::scalar`]; the IEEE-754
//! building blocks it composes are in [`platform`].

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod maths;

pub use maths::platform;
pub use maths::scalar;
pub use maths::scalar::{
    ApproxEquals, EPSILON, Ɛ, abs, approx_equals, approx_equals_within, cbrt, cubic_interpolate,
    deg2rad, div_rem, fused_multiply_add, interpolate, max, median, min, one, rad2deg, scale_b,
    selector, sqrt,
};
pub use platform::DivRem;
