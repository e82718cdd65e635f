use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;

use super::{validate_series, CalculusError};

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// `ln(a⁻¹ b)` for the representative of `b` on the same side as `a`, so a
/// sign flip between samples does not read as a half turn.
#[inline]
fn relative_log<T: FloatScalar>(a: &Quaternion<T>, b: &Quaternion<T>) -> Quaternion<T> {
    let r = a.inverse() * *b;
    if r.w < T::zero() {
        (-r).ln()
    } else {
        r.ln()
    }
}

/// Angular velocity of a rotor series, written into `out`.
///
/// `out[i]` is the body-frame angular velocity `ω_i = 2·D_i` at `t[i]`, where
/// `D_i` is a difference quotient of relative-rotation logs:
///
/// - interior, with `h₀ = t[i] − t[i−1]`, `h₁ = t[i+1] − t[i]`:
///   `D_i = (h₀² ln(q_i⁻¹ q_{i+1}) − h₁² ln(q_i⁻¹ q_{i−1})) / (h₀ h₁ (h₀ + h₁))`,
///   second-order accurate on irregular grids;
/// - ends: `ln(q₀⁻¹ q₁) / h₀` and `−ln(q_{n−1}⁻¹ q_{n−2}) / h_{n−2}`.
///
/// For a rotation at constant rate `ω` the result is `ω` at every sample.
/// Rotors are normalized implicitly through the relative rotation; `q` and
/// `-q` give the same output.
pub fn derivative_into<T: FloatScalar>(
    rotors: &[Quaternion<T>],
    t: &[T],
    out: &mut [[T; 3]],
) -> Result<(), CalculusError> {
    validate_series(t, rotors.len())?;
    if out.len() != rotors.len() {
        return Err(CalculusError::LengthMismatch);
    }
    let n = rotors.len();
    let two = T::two();
    let vec3 = |q: Quaternion<T>| [two * q.x, two * q.y, two * q.z];

    out[0] = vec3(relative_log(&rotors[0], &rotors[1]) / (t[1] - t[0]));
    for i in 1..n - 1 {
        let h0 = t[i] - t[i - 1];
        let h1 = t[i + 1] - t[i];
        let fwd = relative_log(&rotors[i], &rotors[i + 1]);
        let bwd = relative_log(&rotors[i], &rotors[i - 1]);
        let d = (fwd * (h0 * h0) - bwd * (h1 * h1)) / (h0 * h1 * (h0 + h1));
        out[i] = vec3(d);
    }
    out[n - 1] = vec3(-relative_log(&rotors[n - 1], &rotors[n - 2]) / (t[n - 1] - t[n - 2]));
    Ok(())
}

/// Angular velocity of a rotor series (see [`derivative_into`]).
///
/// # Example
///
/// ```
/// use versor::{derivative, Quaternion};
///
/// let t = [0.0_f64, 1.0];
/// let q = [Quaternion::one(), Quaternion::from_axis_angle([1.0, 0.0, 0.0], 0.3)];
/// let w = derivative(&q, &t).unwrap();
/// assert!((w[0][0] - 0.3).abs() < 1e-14);
/// assert!((w[1][0] - 0.3).abs() < 1e-14);
/// ```
#[cfg(feature = "alloc")]
pub fn derivative<T: FloatScalar>(
    rotors: &[Quaternion<T>],
    t: &[T],
) -> Result<Vec<[T; 3]>, CalculusError> {
    let mut out = alloc::vec![[T::zero(); 3]; rotors.len()];
    derivative_into(rotors, t, &mut out)?;
    Ok(out)
}

const STENCIL: usize = 5;

/// Weights `w_j = L_j'(x)` of the derivative of the Lagrange basis through
/// `nodes`, evaluated at `x`.
fn lagrange_derivative_weights<T: FloatScalar>(nodes: &[T], x: T, w: &mut [T]) {
    let m = nodes.len();
    for j in 0..m {
        let mut sum = T::zero();
        for k in 0..m {
            if k == j {
                continue;
            }
            let mut term = T::one() / (nodes[j] - nodes[k]);
            for l in 0..m {
                if l != j && l != k {
                    term = term * (x - nodes[l]) / (nodes[j] - nodes[l]);
                }
            }
            sum = sum + term;
        }
        w[j] = sum;
    }
}

/// Derivative of a vector series, written into `out`.
///
/// At each sample the derivative of the Lagrange polynomial through the five
/// nearest samples is taken (centered in the interior, shifted inward at the
/// ends). Series shorter than five use all samples. Exact for polynomials of
/// degree four or less.
pub fn finite_difference_into<T: FloatScalar, const D: usize>(
    f: &[[T; D]],
    t: &[T],
    out: &mut [[T; D]],
) -> Result<(), CalculusError> {
    validate_series(t, f.len())?;
    if out.len() != f.len() {
        return Err(CalculusError::LengthMismatch);
    }
    let n = f.len();
    let m = n.min(STENCIL);
    let mut w = [T::zero(); STENCIL];

    for i in 0..n {
        let start = i.saturating_sub(m / 2).min(n - m);
        let nodes = &t[start..start + m];
        lagrange_derivative_weights(nodes, t[i], &mut w[..m]);

        let mut acc = [T::zero(); D];
        for (j, wj) in w[..m].iter().enumerate() {
            for (a, v) in acc.iter_mut().zip(&f[start + j]) {
                *a = *a + *wj * *v;
            }
        }
        out[i] = acc;
    }
    Ok(())
}

/// Derivative of a vector series (see [`finite_difference_into`]).
#[cfg(feature = "alloc")]
pub fn finite_difference<T: FloatScalar, const D: usize>(
    f: &[[T; D]],
    t: &[T],
) -> Result<Vec<[T; D]>, CalculusError> {
    let mut out = alloc::vec![[T::zero(); D]; f.len()];
    finite_difference_into(f, t, &mut out)?;
    Ok(out)
}
