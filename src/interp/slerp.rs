use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

/// Spherical linear interpolation between two unit quaternions.
///
/// `tau = 0` returns `q0`, `tau = 1` returns `q1` (or `-q1`, see below).
/// `tau` is not clamped; values outside `[0, 1]` extrapolate along the same
/// great circle.
///
/// Both inputs are normalized first. If `q0 · q1 < 0`, `q1` is negated so
/// the interpolant follows the shorter arc; this tie-break is the same
/// everywhere SLERP is used, SQUAD included. When the arc angle `Ω` is below
/// `√ε` the result is a renormalized linear interpolation, otherwise
/// `(sin((1−τ)Ω) q0 + sin(τΩ) q1) / sin Ω`. The result is always unit length.
///
/// # Example
///
/// ```
/// use versor::Quaternion;
/// use versor::interp::slerp;
///
/// let a = Quaternion::<f64>::one();
/// let b = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 1.0);
/// let s = slerp(&a, &b, 0.25);
/// let expected = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.25);
/// assert!((s - expected).norm() < 1e-14);
/// ```
pub fn slerp<T: FloatScalar>(q0: &Quaternion<T>, q1: &Quaternion<T>, tau: T) -> Quaternion<T> {
    let q0 = q0.normalize();
    let mut q1 = q1.normalize();

    if q0.dot(&q1) < T::zero() {
        q1 = -q1;
    }

    // Ω = arccos(q0 · q1), computed from the chord lengths so that it stays
    // accurate for nearly parallel inputs.
    let omega = T::two() * (q1 - q0).norm().atan2((q1 + q0).norm());

    if omega < T::epsilon().sqrt() {
        return (q0 + (q1 - q0) * tau).normalize();
    }

    let sin_omega = omega.sin();
    let a = ((T::one() - tau) * omega).sin() / sin_omega;
    let b = (tau * omega).sin() / sin_omega;
    (q0 * a + q1 * b).normalize()
}
