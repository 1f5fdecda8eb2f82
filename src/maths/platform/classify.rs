use super::f64_to_bits;

#[inline(always)]
pub fn isnan(x: f64) -> bool {
    let u = f64_to_bits(x);
    (u & 0x7ff0_0000_0000_0000u64) == 0x7ff0_0000_0000_0000u64
        && (u & 0x000f_ffff_ffff_ffffu64) != 0
}

/// True when at least one of `a`, `b` is NaN.
#[inline(always)]
pub fn are_any_nan(a: f64, b: f64) -> bool {
    isnan(a) | isnan(b)
}
