//! Linear and cubic interpolation on fma chains.

use crate::maths::platform::fma;

/// `a + t * (b - a)` as `fma(t, b, fma(-t, a, a))`.
///
/// Returns `a` at `t = 0` and `b` at `t = 1` exactly for finite inputs,
/// which the `a + t * (b - a)` form does not guarantee.
#[inline(always)]
pub fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    fma(t, b, fma(-t, a, a))
}

/// Catmull-Rom segment between `a1` (at `t = 0`) and `b0` (at `t = 1`),
/// with `a0` and `b1` as the outer control points.
///
/// `t = 0` returns `a1` exactly. At `t = 1` the chain still rounds, so the
/// result equals `b0` only when every intermediate is exact (small integers,
/// short dyadic values); otherwise it is within a few hundred
/// `f64::EPSILON` of the largest control point.
///
/// Evaluates
///
/// ```text
/// a1 + t/2 * ((b0 - a0)
///     + t * ((2 a0 - 5 a1 + 4 b0 - b1)
///     + t * (3 (a1 - b0) + b1 - a0)))
/// ```
///
/// in Horner order with every step folded into an fma.
#[inline(always)]
pub fn cubic_interpolate(a0: f64, a1: f64, b0: f64, b1: f64, t: f64) -> f64 {
    let cubic = t * fma(3.0, a1 - b0, b1 - a0);
    let quad = fma(2.0, a0, fma(-5.0, a1, fma(4.0, b0, cubic) - b1));
    fma(0.5 * t, fma(t, quad, b0 - a0), a1)
}
