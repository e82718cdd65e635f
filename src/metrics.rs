//! Distances between quaternions.
//!
//! Two axes of choice:
//!
//! - **rotor** vs **rotation**: rotor distances treat `q` and `-q` as distinct
//!   points on the unit 3-sphere; rotation distances identify them and so
//!   measure distance in SO(3).
//! - **intrinsic** vs **chordal**: intrinsic distances are geodesic angles,
//!   chordal distances are straight-line distances through ℝ⁴.
//!
//! | Function                          | Range     | `d(q, -q)` |
//! |-----------------------------------|-----------|------------|
//! | [`rotor_intrinsic_distance`]      | `[0, 2π]` | `2π`       |
//! | [`rotor_chordal_distance`]        | `[0, ∞)`  | `2|q|`     |
//! | [`rotation_intrinsic_distance`]   | `[0, π]`  | `0`        |
//! | [`rotation_chordal_distance`]     | `[0, ∞)`  | `0`        |
//!
//! All four are symmetric, non-negative and zero on the diagonal. Non-finite
//! components propagate as NaN; the batch forms in [`array`](crate::array)
//! reject them instead.

use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

/// Chord lengths `(|â − b̂|, |â + b̂|)` between the normalized inputs.
#[inline]
fn unit_chords<T: FloatScalar>(a: &Quaternion<T>, b: &Quaternion<T>) -> (T, T) {
    let a = a.normalize();
    let b = b.normalize();
    ((a - b).norm(), (a + b).norm())
}

/// Geodesic angle between `a` and `b` on the 4-sphere, doubled to match the
/// rotation-angle convention: `2·arccos(â · b̂)`.
///
/// Evaluated as `4·atan2(|â − b̂|, |â + b̂|)`, which equals the arccos form
/// with the ratio clamped to `[-1, 1]` but stays exact at `a == b` and at
/// `a == -b`. Not invariant under `b → -b`.
///
/// # Example
///
/// ```
/// use versor::{rotor_intrinsic_distance, Quaternion};
///
/// let q = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.7);
/// assert_eq!(rotor_intrinsic_distance(&q, &q), 0.0);
/// let d = rotor_intrinsic_distance(&q, &-q);
/// assert!((d - 2.0 * core::f64::consts::PI).abs() < 1e-15);
/// ```
pub fn rotor_intrinsic_distance<T: FloatScalar>(a: &Quaternion<T>, b: &Quaternion<T>) -> T {
    let (minus, plus) = unit_chords(a, b);
    T::two() * T::two() * minus.atan2(plus)
}

/// Euclidean distance `|a − b|` between the 4-vectors.
pub fn rotor_chordal_distance<T: FloatScalar>(a: &Quaternion<T>, b: &Quaternion<T>) -> T {
    (*a - *b).norm()
}

/// Rotation angle between the rotations `a` and `b`: `2·arccos(|â · b̂|)`.
///
/// Invariant under `a → -a` and `b → -b`; equal to the smaller of the rotor
/// intrinsic distances to `b` and to `-b`.
///
/// # Example
///
/// ```
/// use versor::{rotation_intrinsic_distance, Quaternion};
///
/// let a = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.2_f64);
/// let b = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.9);
/// assert!((rotation_intrinsic_distance(&a, &b) - 0.7).abs() < 1e-14);
/// assert!((rotation_intrinsic_distance(&a, &-b) - 0.7).abs() < 1e-14);
/// ```
pub fn rotation_intrinsic_distance<T: FloatScalar>(a: &Quaternion<T>, b: &Quaternion<T>) -> T {
    let (minus, plus) = unit_chords(a, b);
    T::two() * T::two() * minus.min(plus).atan2(minus.max(plus))
}

/// Chordal distance between rotations: `min(|a − b|, |a + b|)`.
pub fn rotation_chordal_distance<T: FloatScalar>(a: &Quaternion<T>, b: &Quaternion<T>) -> T {
    let minus = (*a - *b).norm();
    let plus = (*a + *b).norm();
    minus.min(plus)
}
