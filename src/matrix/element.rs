//! Numeric capabilities required of matrix elements

use num_complex::Complex;
use num_traits::{Bounded, NumAssign, NumCast, ToPrimitive};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Element usable in arithmetic matrix operations
///
/// Covers integers, floats and complex numbers. Matrix arithmetic goes
/// through the `*_wrapped` forms: integer types wrap around on overflow in
/// two's complement and never panic, floating types follow IEEE rules.
pub trait Scalar: Copy + Debug + PartialEq + NumAssign + 'static {
    /// Whether division truncates, as it does for integer types
    const INTEGRAL: bool;

    /// Sum, wrapping on integer overflow
    #[must_use]
    fn add_wrapped(self, rhs: Self) -> Self;

    /// Difference, wrapping on integer overflow
    #[must_use]
    fn sub_wrapped(self, rhs: Self) -> Self;

    /// Product, wrapping on integer overflow
    #[must_use]
    fn mul_wrapped(self, rhs: Self) -> Self;

    /// Quotient, wrapping on integer overflow
    ///
    /// Callers rule out a zero divisor for integer types.
    #[must_use]
    fn div_wrapped(self, rhs: Self) -> Self;

    /// Absolute value widened to `f64`, used for pivot selection
    fn magnitude(self) -> f64;

    /// Negation, wrapping on integer overflow
    #[must_use]
    fn neg_wrapped(self) -> Self {
        Self::zero().sub_wrapped(self)
    }
}

macro_rules! integral_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const INTEGRAL: bool = true;

            fn add_wrapped(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            fn sub_wrapped(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            fn mul_wrapped(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            fn div_wrapped(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            fn magnitude(self) -> f64 {
                self.to_f64().map_or(0.0, f64::abs)
            }
        }
    )*};
}

macro_rules! field_scalar {
    ($($t:ty => |$v:ident| $magnitude:expr),* $(,)?) => {$(
        impl Scalar for $t {
            const INTEGRAL: bool = false;

            fn add_wrapped(self, rhs: Self) -> Self {
                self + rhs
            }

            fn sub_wrapped(self, rhs: Self) -> Self {
                self - rhs
            }

            fn mul_wrapped(self, rhs: Self) -> Self {
                self * rhs
            }

            fn div_wrapped(self, rhs: Self) -> Self {
                self / rhs
            }

            fn magnitude(self) -> f64 {
                let $v = self;
                $magnitude
            }
        }
    )*};
}

integral_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

field_scalar!(
    f32 => |v| <f64 as From<f32>>::from(v.abs()),
    f64 => |v| v.abs(),
    Complex<f32> => |v| <f64 as From<f32>>::from(v.norm()),
    Complex<f64> => |v| v.norm(),
);

/// Ordered real element convertible through `f64`
///
/// Needed by range remapping, statistics and saturating conversions.
pub trait Real: Scalar + PartialOrd + NumCast + ToPrimitive + Bounded {
    /// Widen to `f64`, NaN when the value has no representation
    fn to_wide(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Narrow from `f64` with saturation at the type bounds
    ///
    /// NaN maps to zero, fractional parts are truncated toward zero.
    fn from_wide(value: f64) -> Self {
        if value.is_nan() {
            return Self::zero();
        }
        <Self as NumCast>::from(value).unwrap_or_else(|| {
            if value > 0.0 {
                Self::max_value()
            } else {
                Self::min_value()
            }
        })
    }
}

impl<T> Real for T where T: Scalar + PartialOrd + NumCast + ToPrimitive + Bounded {}

/// Total order where NaN sorts below every other value
pub fn compare_nan_low<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    let (a_nan, b_nan) = (a.partial_cmp(a).is_none(), b.partial_cmp(b).is_none());
    match (a_nan, b_nan) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}
