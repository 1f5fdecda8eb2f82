//! scalbn(x, n): x * 2^n by exponent manipulation.
//!
//! Large exponents are applied in chunks of 2^1023 (or 2^-969 on the way
//! down) so the intermediate products stay exact. The final multiply is the
//! only one that can round, and on the way down it always lands with an
//! exponent step below -53 so subnormal results are rounded once.

use super::pow2_normal;

const TWO_P1023: f64 = f64::from_bits(0x7fe0_0000_0000_0000u64);
// 2^-1022 * 2^53
const TWO_M969: f64 = f64::from_bits(0x0360_0000_0000_0000u64);
const DOWN_STEP: i32 = 1022 - 53;

#[inline(always)]
pub fn scalbn(x: f64, mut n: i32) -> f64 {
    let mut y = x;
    if n > 1023 {
        y *= TWO_P1023;
        n -= 1023;
        if n > 1023 {
            y *= TWO_P1023;
            n -= 1023;
            if n > 1023 {
                n = 1023;
            }
        }
    } else if n < -1022 {
        y *= TWO_M969;
        n += DOWN_STEP;
        if n < -1022 {
            y *= TWO_M969;
            n += DOWN_STEP;
            if n < -1022 {
                n = -1022;
            }
        }
    }
    y * pow2_normal(n)
}
