//! Numeric domains for geometry coordinates
//!
//! The geometry types are generic over exactly two coordinate
//! representations: `i32` (integer domain) and `f32` (floating
//! domain). The `Scalar` trait is sealed so no third instantiation can
//! appear; every derived computation (far edges, extents, clip slopes)
//! runs in the widened type so intermediates never wrap or lose
//! precision silently.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::error::GeometryError;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// A coordinate scalar: one of the two supported numeric domains.
///
/// All intermediate arithmetic on rectangle edges happens in
/// [`Scalar::Wide`]; results come back through [`Scalar::narrow`],
/// which is the single place range violations are detected.
pub trait Scalar:
    sealed::Sealed + Copy + PartialEq + PartialOrd + Zero + Debug + 'static
{
    /// Widened representation for intermediate arithmetic.
    type Wide: Copy
        + PartialEq
        + PartialOrd
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>
        + Div<Output = Self::Wide>
        + Debug;

    /// Lossless promotion into the widened representation.
    fn widen(self) -> Self::Wide;

    /// Checked demotion back into the coordinate type.
    fn narrow(wide: Self::Wide) -> Result<Self, GeometryError>;

    /// Computes `delta * num / den` without intermediate overflow.
    ///
    /// The slope term of segment clipping: `delta` and `num` can each
    /// approach twice the coordinate range, so their product does not
    /// fit `Wide` in the integer domain and goes through a wider
    /// intermediate. Callers guarantee `den != 0` and
    /// `|num| <= |den|`, which bounds the quotient by `|delta|`.
    fn mul_div(delta: Self::Wide, num: Self::Wide, den: Self::Wide) -> Self::Wide;
}

/// Integer domain.
///
/// Safe over the full `i32` range: sums and differences (`x + w`,
/// `max_x - min_x`) are computed in `i64`, which cannot overflow on
/// values derived from two `i32` operands, and slope products go
/// through `i128`. Only narrowing a final result back to `i32` can
/// fail.
impl Scalar for i32 {
    type Wide = i64;

    fn widen(self) -> i64 {
        i64::from(self)
    }

    fn narrow(wide: i64) -> Result<i32, GeometryError> {
        i32::try_from(wide).map_err(|_| GeometryError::Overflow)
    }

    fn mul_div(delta: i64, num: i64, den: i64) -> i64 {
        // delta * num can reach 2^64 for full-range differences.
        (i128::from(delta) * i128::from(num) / i128::from(den)) as i64
    }
}

/// Floating domain (single precision).
///
/// Safe for |coordinate| up to `f32::MAX`; intermediates are computed
/// in `f64`, which represents every `f32` exactly and keeps edge sums
/// exact for integer-valued coordinates up to 2^53. Narrowing rejects
/// non-finite results and finite results beyond `f32` range.
impl Scalar for f32 {
    type Wide = f64;

    fn widen(self) -> f64 {
        f64::from(self)
    }

    fn narrow(wide: f64) -> Result<f32, GeometryError> {
        if !wide.is_finite() {
            return Err(GeometryError::NonFinite);
        }
        let value = wide as f32;
        if value.is_infinite() {
            return Err(GeometryError::Overflow);
        }
        Ok(value)
    }

    fn mul_div(delta: f64, num: f64, den: f64) -> f64 {
        delta * num / den
    }
}

/// Smaller of two widened values under partial order.
///
/// Incomparable pairs (NaN) keep the first operand; callers relying on
/// ordering have already filtered non-finite inputs.
pub(crate) fn wide_min<W: Copy + PartialOrd>(a: W, b: W) -> W {
    if b < a { b } else { a }
}

/// Larger of two widened values under partial order.
pub(crate) fn wide_max<W: Copy + PartialOrd>(a: W, b: W) -> W {
    if b > a { b } else { a }
}
