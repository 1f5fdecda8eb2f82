//! Truncating integer division with remainder.

/// Quotient and remainder in one call, truncating toward zero.
///
/// The remainder carries the sign of the dividend, so `-7 / 2` gives
/// `(-3, -1)`.
///
/// # Panics
///
/// Panics when `rhs` is zero, or when the quotient overflows (`MIN / -1`),
/// exactly as the `/` and `%` operators do.
pub trait DivRem: Sized {
    fn div_rem(self, rhs: Self) -> (Self, Self);
}

macro_rules! impl_div_rem {
    ($($t:ty),*) => {
        $(
            impl DivRem for $t {
                #[inline(always)]
                fn div_rem(self, rhs: Self) -> (Self, Self) {
                    (self / rhs, self % rhs)
                }
            }
        )*
    };
}

impl_div_rem!(i32, i64);
