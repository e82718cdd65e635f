//! Rotation interpolation: SLERP and SQUAD.
//!
//! [`slerp`] interpolates along the shorter great-circle arc between two unit
//! quaternions. [`squad_evaluate`] blends two SLERPs into a segment that is
//! shaped by a pair of control quaternions, and [`Squad`] / [`DynSquad`] build
//! those controls from a time series of rotors so that consecutive segments
//! join with continuous angular velocity.
//!
//! Unlike scalar interpolants, SQUAD does not extrapolate: queries outside the
//! sample times are rejected with [`InterpError::OutOfRange`]. Each SQUAD
//! interpolant comes in a fixed-size (const-generic, stack-allocated, no-std)
//! and a dynamic (`Dyn*`, requires `alloc`) variant.
//!
//! # Examples
//!
//! ```
//! use versor::Quaternion;
//! use versor::interp::slerp;
//!
//! let one = Quaternion::<f64>::one();
//! let x = Quaternion::i();
//! let mid = slerp(&one, &x, 0.5);
//! let h = core::f64::consts::FRAC_1_SQRT_2;
//! assert!((mid - Quaternion::new(h, h, 0.0, 0.0)).norm() < 1e-14);
//! ```

mod slerp;
mod squad;


pub use slerp::slerp;
pub use squad::{squad_evaluate, unflip_rotors_in_place, Squad, SquadSettings};

#[cfg(feature = "alloc")]
pub use squad::{squad, unflip_rotors, DynSquad};

use crate::traits::FloatScalar;

/// Errors from interpolant construction and evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// Not enough data points for the interpolation method.
    TooFewPoints,
    /// The time values are not strictly increasing.
    NotSorted,
    /// Times and rotors have different lengths (dynamic variants only).
    LengthMismatch,
    /// Query time lies outside the sampled range.
    OutOfRange,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::TooFewPoints => write!(f, "not enough data points for interpolation"),
            InterpError::NotSorted => write!(f, "time values must be strictly increasing"),
            InterpError::LengthMismatch => write!(f, "times and rotors must have the same length"),
            InterpError::OutOfRange => write!(f, "query time outside the sampled range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

/// Validate that a slice is strictly increasing.
///
/// NaN entries fail the comparison and are reported as unsorted.
fn validate_sorted<T: FloatScalar>(ts: &[T]) -> Result<(), InterpError> {
    for i in 1..ts.len() {
        if !(ts[i] > ts[i - 1]) {
            return Err(InterpError::NotSorted);
        }
    }
    Ok(())
}

/// Binary search for the segment containing `t` in a sorted slice.
///
/// Returns index `i` such that `ts[i] <= t <= ts[i+1]`; the last knot maps to
/// the last segment. Queries outside `[ts[0], ts[n-1]]` (or NaN) are errors.
fn find_segment<T: FloatScalar>(ts: &[T], t: T) -> Result<usize, InterpError> {
    debug_assert!(ts.len() >= 2);
    let n = ts.len();
    if !(t >= ts[0] && t <= ts[n - 1]) {
        return Err(InterpError::OutOfRange);
    }
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if t < ts[mid] {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(lo)
}
