//! Branchless boolean conversions.
//!
//! A Rust `bool` is one byte holding exactly 0 or 1, and `as` casts from it
//! are defined on that value, so neither conversion needs a branch.

/// 1 for `true`, 0 for `false`.
#[inline(always)]
pub fn one(v: bool) -> u8 {
    v as u8
}

/// All bits set (`-1`) for `true`, 0 for `false`.
///
/// Meant as a mask: `(a & selector(c)) | (b & !selector(c))` picks `a` when
/// `c` holds.
#[inline(always)]
pub fn selector(v: bool) -> i32 {
    -(v as i32)
}
