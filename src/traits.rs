use core::fmt::Debug;
use num_traits::{Float, FloatConst, Num, NumCast, One, Zero};

/// Trait for types that can be used as quaternion components.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point quaternion components.
///
/// Required by everything that needs `sqrt`, `sin`, `atan2`, etc.
/// Covers `f32` and `f64`.
pub trait FloatScalar: Scalar + Float + FloatConst {
    /// `0.5`, built from `one()` so it is exact for every float type.
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// `2.0`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Convert an `f64` literal. Values the target cannot represent become NaN.
    #[inline]
    fn lit(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// Threshold below which small-argument series replace `sin(v)/v`
    /// and `atan(r)/r`: `ε^(1/4)`.
    #[inline]
    fn series_threshold() -> Self {
        Self::epsilon().sqrt().sqrt()
    }
}

impl<T: Scalar + Float + FloatConst> FloatScalar for T {}
