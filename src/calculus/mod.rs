//! Differentiation and integration of irregularly sampled time series.
//!
//! - [`derivative`] / [`derivative_into`]: body-frame angular velocity of a
//!   rotor series, from logs of neighbouring relative rotations.
//! - [`finite_difference`] / [`finite_difference_into`]: derivative of a
//!   vector series by differentiating the local five-point Lagrange
//!   polynomial.
//! - [`indefinite_integral`] / [`indefinite_integral_into`]: trapezoidal
//!   running integral.
//! - [`definite_integral`], [`integrate`]: trapezoidal integral between two
//!   bounds, or over the whole sampled range.
//!
//! Vector series are slices of `[T; D]`; times are strictly increasing and
//! never need uniform spacing. Every operation requires at least two samples.
//! The `*_into` forms write into caller-provided buffers and work without
//! `alloc`; the others allocate their output.
//!
//! # Example
//!
//! ```
//! use versor::Quaternion;
//! use versor::calculus::derivative;
//!
//! // constant rotation about z at 0.8 rad/s
//! let t = [0.0_f64, 0.1, 0.35, 0.5, 0.9];
//! let q: Vec<_> = t
//!     .iter()
//!     .map(|&t| Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.8 * t))
//!     .collect();
//! let w = derivative(&q, &t).unwrap();
//! for wi in &w {
//!     assert!((wi[2] - 0.8).abs() < 1e-12);
//! }
//! ```

mod derivative;
mod integral;

#[cfg(test)]
mod tests;

pub use derivative::{derivative_into, finite_difference_into};
pub use integral::{definite_integral, indefinite_integral_into, integrate};

#[cfg(feature = "alloc")]
pub use derivative::{derivative, finite_difference};
#[cfg(feature = "alloc")]
pub use integral::indefinite_integral;

use crate::traits::FloatScalar;

/// Errors from calculus operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculusError {
    /// Fewer than two samples.
    TooFewPoints,
    /// The sample times are not strictly increasing.
    NotSorted,
    /// Times, values and output buffer lengths disagree.
    LengthMismatch,
    /// An integration bound lies outside the sampled range.
    OutOfRange,
}

impl core::fmt::Display for CalculusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalculusError::TooFewPoints => write!(f, "at least two samples are required"),
            CalculusError::NotSorted => write!(f, "sample times must be strictly increasing"),
            CalculusError::LengthMismatch => {
                write!(f, "sample times and values must have the same length")
            }
            CalculusError::OutOfRange => write!(f, "integration bound outside the sampled range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalculusError {}

/// Check a series of `len` values against its times.
fn validate_series<T: FloatScalar>(t: &[T], len: usize) -> Result<(), CalculusError> {
    if t.len() != len {
        return Err(CalculusError::LengthMismatch);
    }
    if len < 2 {
        return Err(CalculusError::TooFewPoints);
    }
    for i in 1..t.len() {
        if !(t[i] > t[i - 1]) {
            return Err(CalculusError::NotSorted);
        }
    }
    Ok(())
}
