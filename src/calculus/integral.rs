use crate::traits::FloatScalar;

use super::{validate_series, CalculusError};

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// `(a + b) · h / 2`, component-wise.
#[inline]
fn trapezoid<T: FloatScalar, const D: usize>(a: &[T; D], b: &[T; D], h: T) -> [T; D] {
    let half_h = h * T::half();
    let mut out = [T::zero(); D];
    for k in 0..D {
        out[k] = (a[k] + b[k]) * half_h;
    }
    out
}

#[inline]
fn add_assign<T: FloatScalar, const D: usize>(acc: &mut [T; D], v: &[T; D]) {
    for (a, b) in acc.iter_mut().zip(v) {
        *a = *a + *b;
    }
}

/// Value of the piecewise-linear interpolant of segment `i` at `x`.
#[inline]
fn lerp_at<T: FloatScalar, const D: usize>(f: &[[T; D]], t: &[T], i: usize, x: T) -> [T; D] {
    let s = (x - t[i]) / (t[i + 1] - t[i]);
    let mut out = f[i];
    for k in 0..D {
        out[k] = f[i][k] + (f[i + 1][k] - f[i][k]) * s;
    }
    out
}

/// Trapezoidal running integral, written into `out`.
///
/// `out[0]` is zero and `out[i] = ∫_{t[0]}^{t[i]} f`. Exact for piecewise
/// linear `f`.
pub fn indefinite_integral_into<T: FloatScalar, const D: usize>(
    f: &[[T; D]],
    t: &[T],
    out: &mut [[T; D]],
) -> Result<(), CalculusError> {
    validate_series(t, f.len())?;
    if out.len() != f.len() {
        return Err(CalculusError::LengthMismatch);
    }
    out[0] = [T::zero(); D];
    for i in 1..f.len() {
        let mut acc = out[i - 1];
        add_assign(&mut acc, &trapezoid(&f[i - 1], &f[i], t[i] - t[i - 1]));
        out[i] = acc;
    }
    Ok(())
}

/// Trapezoidal running integral (see [`indefinite_integral_into`]).
///
/// # Example
///
/// ```
/// use versor::indefinite_integral;
///
/// let t = [0.0_f64, 1.0, 3.0];
/// let f = [[1.0, 0.0], [1.0, 1.0], [1.0, 3.0]];
/// let out = indefinite_integral(&f, &t).unwrap();
/// assert_eq!(out, vec![[0.0, 0.0], [1.0, 0.5], [3.0, 4.5]]);
/// ```
#[cfg(feature = "alloc")]
pub fn indefinite_integral<T: FloatScalar, const D: usize>(
    f: &[[T; D]],
    t: &[T],
) -> Result<Vec<[T; D]>, CalculusError> {
    let mut out = alloc::vec![[T::zero(); D]; f.len()];
    indefinite_integral_into(f, t, &mut out)?;
    Ok(out)
}

/// Integral of `f` from `t0` to `t1`.
///
/// Uses the trapezoidal rule over the samples, with `f` interpolated
/// linearly at bounds that fall between samples. Both bounds must lie in
/// `[t[0], t[n-1]]`, otherwise `CalculusError::OutOfRange`. If `t1 < t0`
/// the result is the negated integral from `t1` to `t0`, so integrals are
/// additive over any split point.
///
/// # Example
///
/// ```
/// use versor::definite_integral;
///
/// let t = [0.0_f64, 1.0, 2.0];
/// let f = [[0.0], [1.0], [2.0]];
/// let v = definite_integral(&f, &t, 0.5, 1.5).unwrap();
/// assert!((v[0] - 1.0).abs() < 1e-15);
/// assert!(definite_integral(&f, &t, 0.5, 2.5).is_err());
/// ```
pub fn definite_integral<T: FloatScalar, const D: usize>(
    f: &[[T; D]],
    t: &[T],
    t0: T,
    t1: T,
) -> Result<[T; D], CalculusError> {
    validate_series(t, f.len())?;
    let (first, last) = (t[0], t[t.len() - 1]);
    let in_range = |x: T| x >= first && x <= last;
    if !in_range(t0) || !in_range(t1) {
        return Err(CalculusError::OutOfRange);
    }

    let (lo, hi, sign) = if t1 < t0 {
        (t1, t0, -T::one())
    } else {
        (t0, t1, T::one())
    };

    let mut acc = [T::zero(); D];
    for i in 0..t.len() - 1 {
        let a = lo.max(t[i]);
        let b = hi.min(t[i + 1]);
        if b <= a {
            continue;
        }
        let fa = if a == t[i] { f[i] } else { lerp_at(f, t, i, a) };
        let fb = if b == t[i + 1] {
            f[i + 1]
        } else {
            lerp_at(f, t, i, b)
        };
        add_assign(&mut acc, &trapezoid(&fa, &fb, b - a));
    }

    for v in acc.iter_mut() {
        *v = *v * sign;
    }
    Ok(acc)
}

/// Trapezoidal integral over the whole sampled range.
pub fn integrate<T: FloatScalar, const D: usize>(
    f: &[[T; D]],
    t: &[T],
) -> Result<[T; D], CalculusError> {
    validate_series(t, f.len())?;
    let mut acc = [T::zero(); D];
    for i in 1..f.len() {
        add_assign(&mut acc, &trapezoid(&f[i - 1], &f[i], t[i] - t[i - 1]));
    }
    Ok(acc)
}
