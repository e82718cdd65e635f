//! Batch forms of the scalar operations.
//!
//! Each function broadcasts its operands (see [`broadcast_shape`]) and applies
//! the scalar formula element by element, in row-major order of the output.
//!
//! [`broadcast_shape`]: super::broadcast_shape

use super::{zip3_with, zip5_with, zip_with, Array, ArrayError};
use crate::interp;
use crate::metrics;
use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

fn check_finite<T: FloatScalar>(a: &Array<Quaternion<T>>) -> Result<(), ArrayError> {
    if a.iter().all(Quaternion::is_finite) {
        Ok(())
    } else {
        Err(ArrayError::NonFinite)
    }
}

fn distance<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
    f: fn(&Quaternion<T>, &Quaternion<T>) -> T,
) -> Result<Array<T>, ArrayError> {
    check_finite(a)?;
    check_finite(b)?;
    zip_with(a, b, f)
}

/// Batch [`rotor_intrinsic_distance`](crate::rotor_intrinsic_distance).
///
/// Returns `ArrayError::NonFinite` if any input has a NaN or infinite
/// component.
pub fn rotor_intrinsic_distance<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
) -> Result<Array<T>, ArrayError> {
    distance(a, b, metrics::rotor_intrinsic_distance)
}

/// Batch [`rotor_chordal_distance`](crate::rotor_chordal_distance).
pub fn rotor_chordal_distance<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
) -> Result<Array<T>, ArrayError> {
    distance(a, b, metrics::rotor_chordal_distance)
}

/// Batch [`rotation_intrinsic_distance`](crate::rotation_intrinsic_distance).
pub fn rotation_intrinsic_distance<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
) -> Result<Array<T>, ArrayError> {
    distance(a, b, metrics::rotation_intrinsic_distance)
}

/// Batch [`rotation_chordal_distance`](crate::rotation_chordal_distance).
pub fn rotation_chordal_distance<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
) -> Result<Array<T>, ArrayError> {
    distance(a, b, metrics::rotation_chordal_distance)
}

/// Batch [`slerp`](crate::slerp), broadcasting both endpoints and `tau`.
pub fn slerp<T: FloatScalar>(
    q0: &Array<Quaternion<T>>,
    q1: &Array<Quaternion<T>>,
    tau: &Array<T>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip3_with(q0, q1, tau, |a, b, &t| interp::slerp(a, b, t))
}

/// Batch [`squad_evaluate`](crate::squad_evaluate) over five broadcast
/// operands.
pub fn squad_evaluate<T: FloatScalar>(
    q0: &Array<Quaternion<T>>,
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
    q1: &Array<Quaternion<T>>,
    tau: &Array<T>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip5_with((q0, a, b, q1, tau), |q0, a, b, q1, &t| {
        interp::squad_evaluate(q0, a, b, q1, t)
    })
}

// ── Algebra ──────────────────────────────────────────────────────────

/// Element-wise Hamilton product `a * b`.
pub fn multiply<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip_with(a, b, |x, y| *x * *y)
}

/// Element-wise `a * b⁻¹`.
pub fn divide<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip_with(a, b, |x, y| *x / *y)
}

pub fn add<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip_with(a, b, |x, y| *x + *y)
}

pub fn subtract<T: FloatScalar>(
    a: &Array<Quaternion<T>>,
    b: &Array<Quaternion<T>>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip_with(a, b, |x, y| *x - *y)
}

/// Element-wise `exp(t · ln q)`.
pub fn powf<T: FloatScalar>(
    q: &Array<Quaternion<T>>,
    t: &Array<T>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip_with(q, t, |q, &t| q.powf(t))
}

pub fn conjugate<T: FloatScalar>(q: &Array<Quaternion<T>>) -> Array<Quaternion<T>> {
    q.map(Quaternion::conjugate)
}

pub fn norm<T: FloatScalar>(q: &Array<Quaternion<T>>) -> Array<T> {
    q.map(Quaternion::norm)
}

pub fn normalize<T: FloatScalar>(q: &Array<Quaternion<T>>) -> Array<Quaternion<T>> {
    q.map(Quaternion::normalize)
}

pub fn inverse<T: FloatScalar>(q: &Array<Quaternion<T>>) -> Array<Quaternion<T>> {
    q.map(Quaternion::inverse)
}

pub fn exp<T: FloatScalar>(q: &Array<Quaternion<T>>) -> Array<Quaternion<T>> {
    q.map(Quaternion::exp)
}

pub fn ln<T: FloatScalar>(q: &Array<Quaternion<T>>) -> Array<Quaternion<T>> {
    q.map(Quaternion::ln)
}

// ── Conversions ──────────────────────────────────────────────────────

/// Batch [`from_euler_angles`](crate::from_euler_angles) (z-y-z).
pub fn from_euler_angles<T: FloatScalar>(
    alpha: &Array<T>,
    beta: &Array<T>,
    gamma: &Array<T>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip3_with(alpha, beta, gamma, |&a, &b, &g| {
        Quaternion::from_euler_angles(a, b, g)
    })
}

/// Batch [`from_spherical_coords`](crate::from_spherical_coords).
pub fn from_spherical_coords<T: FloatScalar>(
    theta: &Array<T>,
    phi: &Array<T>,
) -> Result<Array<Quaternion<T>>, ArrayError> {
    zip_with(theta, phi, |&th, &ph| Quaternion::from_spherical_coords(th, ph))
}
