use super::Quaternion;
use crate::traits::FloatScalar;

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Conjugate: `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Squared norm: `w² + x² + y² + z²`, the real part of `q · q̄`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm of the 4-vector.
    ///
    /// NaN and infinite components propagate.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Normalize to unit quaternion.
    ///
    /// The zero quaternion normalizes to NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        let inv = T::one() / self.norm();
        *self * inv
    }

    /// Inverse: `conjugate / norm²`.
    ///
    /// For unit quaternions this equals the conjugate. The zero quaternion
    /// has no inverse; the result is non-finite rather than a panic.
    #[inline]
    pub fn inverse(&self) -> Self {
        let inv_n2 = T::one() / self.norm_squared();
        self.conjugate() * inv_n2
    }

    /// Dot product of two quaternions as 4-vectors.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

// ── Exponential and logarithm ────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Quaternion exponential.
    ///
    /// `exp(w + v) = eʷ (cos|v| + v̂ sin|v|)`. Below `ε^(1/4)` the factor
    /// `sin|v| / |v|` is replaced by its Taylor series.
    pub fn exp(&self) -> Self {
        let vnorm = self.vector_norm();
        let e = self.w.exp();
        let s = sinc(vnorm);
        Self {
            w: e * vnorm.cos(),
            x: e * s * self.x,
            y: e * s * self.y,
            z: e * s * self.z,
        }
    }

    /// Natural logarithm (principal branch).
    ///
    /// For a unit quaternion the result is a pure vector whose norm is half
    /// the rotation angle. When the vector part is negligible relative to
    /// `w`, the result is real for positive `w`; a negative real `w` maps to
    /// `ln|w| + π·i`. The zero quaternion gives `-∞`.
    #[doc(alias = "log")]
    pub fn ln(&self) -> Self {
        let b = self.vector_norm();
        let absw = self.w.abs();
        if b <= T::epsilon() * absw {
            if self.w < T::zero() {
                return Self::new(absw.ln(), T::PI(), T::zero(), T::zero());
            }
            return Self::from_scalar(self.w.ln());
        }
        let f = atan2_over(b, self.w);
        Self {
            w: (self.w * self.w + b * b).ln() * T::half(),
            x: f * self.x,
            y: f * self.y,
            z: f * self.z,
        }
    }

    /// Real power: `exp(t · ln q)`.
    ///
    /// `powf(0)` is exactly one, including for the zero quaternion.
    pub fn powf(&self, t: T) -> Self {
        if t == T::zero() {
            return Self::one();
        }
        (self.ln() * t).exp()
    }

    /// Quaternion power: `exp(ln(q) · p)`.
    pub fn powq(&self, p: &Self) -> Self {
        (self.ln() * *p).exp()
    }

    /// Principal square root.
    ///
    /// Satisfies `sqrt(q)² = q`. Negative reals map to `√|q| · i`.
    pub fn sqrt(&self) -> Self {
        let a = self.norm();
        if a == T::zero() {
            return Self::zero();
        }
        // a + w without cancellation for w < 0
        let b2 = self.x * self.x + self.y * self.y + self.z * self.z;
        let apw = if self.w >= T::zero() {
            a + self.w
        } else {
            b2 / (a - self.w)
        };
        if apw == T::zero() {
            return Self::new(T::zero(), a.sqrt(), T::zero(), T::zero());
        }
        let c = T::one() / (T::two() * apw).sqrt();
        Self {
            w: apw * c,
            x: self.x * c,
            y: self.y * c,
            z: self.z * c,
        }
    }

    /// Rotation angle of a unit quaternion: `2 |ln q|`, in `[0, 2π]`.
    pub fn angle(&self) -> T {
        T::two() * self.ln().norm()
    }

    /// Spherical linear interpolation between `self` and `other`.
    ///
    /// See [`slerp`](crate::interp::slerp).
    #[inline]
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        crate::interp::slerp(self, other, t)
    }
}

/// `sin(v) / v` with a series below `ε^(1/4)`.
#[inline]
fn sinc<T: FloatScalar>(v: T) -> T {
    if v < T::series_threshold() {
        let v2 = v * v;
        T::one() - v2 / T::lit(6.0) + v2 * v2 / T::lit(120.0)
    } else {
        v.sin() / v
    }
}

/// `atan2(b, w) / b` for `b > 0`, with an `atan(r)/r` series when
/// `r = b / w` is small and `w > 0`.
#[inline]
fn atan2_over<T: FloatScalar>(b: T, w: T) -> T {
    if w > T::zero() {
        let r = b / w;
        if r < T::series_threshold() {
            let r2 = r * r;
            return (T::one() - r2 / T::lit(3.0) + r2 * r2 / T::lit(5.0)) / w;
        }
    }
    b.atan2(w) / b
}
