use super::Quaternion;
use crate::traits::FloatScalar;

#[cfg(feature = "complex")]
use num_complex::Complex;

#[inline]
fn cross<T: FloatScalar>(a: &[T; 3], b: &[T; 3]) -> [T; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create from an axis (must be unit length) and angle in radians.
    #[inline]
    pub fn from_axis_angle(axis: [T; 3], angle: T) -> Self {
        let (s, c) = (angle * T::half()).sin_cos();
        Self {
            w: c,
            x: axis[0] * s,
            y: axis[1] * s,
            z: axis[2] * s,
        }
    }

    /// Create from a rotation vector (axis scaled by angle): `exp(v / 2)`.
    #[inline]
    pub fn from_rotation_vector(v: [T; 3]) -> Self {
        let h = T::half();
        Self::from_vector([v[0] * h, v[1] * h, v[2] * h]).exp()
    }

    /// Create from Euler angles in the z-y-z convention.
    ///
    /// The result is `Rz(alpha) · Ry(beta) · Rz(gamma)`, composed as the
    /// Hamilton product of the three elemental rotations.
    pub fn from_euler_angles(alpha: T, beta: T, gamma: T) -> Self {
        let h = T::half();
        let (sa, ca) = (alpha * h).sin_cos();
        let (sb, cb) = (beta * h).sin_cos();
        let (sc, cc) = (gamma * h).sin_cos();
        let zero = T::zero();

        let za = Self::new(ca, zero, zero, sa);
        let yb = Self::new(cb, zero, sb, zero);
        let zc = Self::new(cc, zero, zero, sc);
        za * yb * zc
    }

    /// Create the rotation taking `ẑ` to the direction with polar angle
    /// `theta` and azimuth `phi`: `Rz(phi) · Ry(theta)`.
    pub fn from_spherical_coords(theta: T, phi: T) -> Self {
        let h = T::half();
        let (st, ct) = (theta * h).sin_cos();
        let (sp, cp) = (phi * h).sin_cos();
        let zero = T::zero();

        Self::new(cp, zero, zero, sp) * Self::new(ct, zero, st, zero)
    }

    /// Create from a 3×3 row-major rotation matrix using Shepperd's method.
    ///
    /// Numerically stable for all rotation angles.
    pub fn from_rotation_matrix(m: &[[T; 3]; 3]) -> Self {
        let trace = m[0][0] + m[1][1] + m[2][2];
        let one = T::one();
        let quarter = T::lit(0.25);
        let half = T::half();

        if trace > T::zero() {
            let s = (trace + one).sqrt();
            let k = half / s;
            Self {
                w: s * half,
                x: (m[2][1] - m[1][2]) * k,
                y: (m[0][2] - m[2][0]) * k,
                z: (m[1][0] - m[0][1]) * k,
            }
        } else if m[0][0] >= m[1][1] && m[0][0] >= m[2][2] {
            let s = ((one + m[0][0] - m[1][1] - m[2][2]) * quarter).sqrt();
            let k = quarter / s;
            Self {
                w: (m[2][1] - m[1][2]) * k,
                x: s,
                y: (m[0][1] + m[1][0]) * k,
                z: (m[0][2] + m[2][0]) * k,
            }
        } else if m[1][1] >= m[2][2] {
            let s = ((one - m[0][0] + m[1][1] - m[2][2]) * quarter).sqrt();
            let k = quarter / s;
            Self {
                w: (m[0][2] - m[2][0]) * k,
                x: (m[0][1] + m[1][0]) * k,
                y: s,
                z: (m[1][2] + m[2][1]) * k,
            }
        } else {
            let s = ((one - m[0][0] - m[1][1] + m[2][2]) * quarter).sqrt();
            let k = quarter / s;
            Self {
                w: (m[1][0] - m[0][1]) * k,
                x: (m[0][2] + m[2][0]) * k,
                y: (m[1][2] + m[2][1]) * k,
                z: s,
            }
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Rotate a vector: `q v q⁻¹` for a unit quaternion.
    ///
    /// Uses `v' = v + 2w(u × v) + 2(u × (u × v))`.
    #[inline]
    pub fn rotate(&self, v: &[T; 3]) -> [T; 3] {
        let u = self.vector();
        let two = T::two();
        let uv = cross(&u, v);
        let uuv = cross(&u, &uv);
        [
            v[0] + uv[0] * (two * self.w) + uuv[0] * two,
            v[1] + uv[1] * (two * self.w) + uuv[1] * two,
            v[2] + uv[2] * (two * self.w) + uuv[2] * two,
        ]
    }

    /// Convert to a 3×3 row-major rotation matrix.
    pub fn to_rotation_matrix(&self) -> [[T; 3]; 3] {
        let two = T::two();
        let one = T::one();
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        [
            [one - two * (yy + zz), two * (xy - wz), two * (xz + wy)],
            [two * (xy + wz), one - two * (xx + zz), two * (yz - wx)],
            [two * (xz - wy), two * (yz + wx), one - two * (xx + yy)],
        ]
    }

    /// Convert to axis-angle representation.
    ///
    /// Returns `(axis, angle)` where `axis` is a unit vector and `angle` is in radians.
    /// For identity rotation, returns `([1,0,0], 0)`.
    pub fn to_axis_angle(&self) -> ([T; 3], T) {
        let n = self.vector_norm();

        if n < T::epsilon() {
            ([T::one(), T::zero(), T::zero()], T::zero())
        } else {
            let inv_n = T::one() / n;
            let angle = T::two() * n.atan2(self.w);
            ([self.x * inv_n, self.y * inv_n, self.z * inv_n], angle)
        }
    }

    /// Rotation vector `2 · ln(q)` of a unit quaternion.
    pub fn to_rotation_vector(&self) -> [T; 3] {
        let l = self.ln();
        let two = T::two();
        [l.x * two, l.y * two, l.z * two]
    }

    /// Euler angles `(alpha, beta, gamma)` in the z-y-z convention.
    ///
    /// Inverse of [`Quaternion::from_euler_angles`] for `beta` in `(0, π)`.
    /// Works for non-unit quaternions.
    pub fn to_euler_angles(&self) -> (T, T, T) {
        let n = self.norm_squared();
        let a = self.z.atan2(self.w);
        let b = (-self.x).atan2(self.y);
        let c = ((self.w * self.w + self.z * self.z) / n).sqrt().min(T::one());
        (a + b, T::two() * c.acos(), a - b)
    }

    /// Spherical coordinates `(theta, phi)` of the direction `q ẑ q⁻¹`.
    ///
    /// Inverse of [`Quaternion::from_spherical_coords`] for `theta` in `(0, π)`.
    pub fn to_spherical_coords(&self) -> (T, T) {
        let n = self.norm_squared();
        let c = ((self.w * self.w + self.z * self.z) / n).sqrt().min(T::one());
        let phi = self.z.atan2(self.w) + (-self.x).atan2(self.y);
        (T::two() * c.acos(), phi)
    }

    /// Two-complex (spinor) form `[w + z·i, y + x·i]`.
    #[cfg(feature = "complex")]
    pub fn to_spinor(&self) -> [Complex<T>; 2] {
        [Complex::new(self.w, self.z), Complex::new(self.y, self.x)]
    }
}

/// Unit quaternion for z-y-z Euler angles; see [`Quaternion::from_euler_angles`].
///
/// ```
/// use versor::{from_euler_angles, Quaternion};
///
/// let q = from_euler_angles(0.4_f64, 0.0, 0.3);
/// let z = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.7);
/// assert!((q - z).norm() < 1e-14);
/// ```
pub fn from_euler_angles<T: FloatScalar>(alpha: T, beta: T, gamma: T) -> Quaternion<T> {
    Quaternion::from_euler_angles(alpha, beta, gamma)
}

/// Unit quaternion for spherical coordinates; see
/// [`Quaternion::from_spherical_coords`].
pub fn from_spherical_coords<T: FloatScalar>(theta: T, phi: T) -> Quaternion<T> {
    Quaternion::from_spherical_coords(theta, phi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn quat_approx_eq(a: &Quaternion<f64>, b: &Quaternion<f64>) -> bool {
        // Quaternions q and -q represent the same rotation
        (*a - *b).norm() < EPS || (*a + *b).norm() < EPS
    }

    fn vec_approx_eq(a: &[f64; 3], b: &[f64; 3]) -> bool {
        approx_eq(a[0], b[0]) && approx_eq(a[1], b[1]) && approx_eq(a[2], b[2])
    }

    #[test]
    fn from_axis_angle_z_90() {
        let q = Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2);
        assert!(approx_eq(q.norm(), 1.0));
        assert!(approx_eq(q.w, FRAC_PI_4.cos()));
        assert!(approx_eq(q.z, FRAC_PI_4.sin()));
    }

    #[test]
    fn rotation_vector_roundtrip() {
        let v = [0.3, -0.2, 0.9];
        let q = Quaternion::from_rotation_vector(v);
        assert!(approx_eq(q.norm(), 1.0));
        assert!(vec_approx_eq(&q.to_rotation_vector(), &v));
        assert_eq!(Quaternion::from_rotation_vector([0.0; 3]), Quaternion::one());
    }

    #[test]
    fn euler_angles_match_closed_form() {
        let (alpha, beta, gamma) = (0.4, 1.1, -0.7);
        let q = Quaternion::from_euler_angles(alpha, beta, gamma);
        let (ca, sa) = ((alpha / 2.0_f64).cos(), (alpha / 2.0_f64).sin());
        let (cb, sb) = ((beta / 2.0_f64).cos(), (beta / 2.0_f64).sin());
        let (cc, sc) = ((gamma / 2.0_f64).cos(), (gamma / 2.0_f64).sin());
        let expected = Quaternion::new(
            ca * cb * cc - sa * cb * sc,
            ca * sb * sc - sa * sb * cc,
            ca * sb * cc + sa * sb * sc,
            sa * cb * cc + ca * cb * sc,
        );
        assert!((q - expected).norm() < EPS);
        assert!(approx_eq(q.norm(), 1.0));
    }

    #[test]
    fn euler_angles_roundtrip() {
        let (alpha, beta, gamma) = (0.4, 1.1, -0.7);
        let q = Quaternion::from_euler_angles(alpha, beta, gamma);
        let (a, b, c) = q.to_euler_angles();
        assert!(approx_eq(a, alpha));
        assert!(approx_eq(b, beta));
        assert!(approx_eq(c, gamma));
    }

    #[test]
    fn euler_angles_single_axis() {
        let q = Quaternion::from_euler_angles(0.8, 0.0, 0.0);
        let expected = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.8);
        assert!(quat_approx_eq(&q, &expected));
        let q = Quaternion::from_euler_angles(0.0, 0.8, 0.0);
        let expected = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.8);
        assert!(quat_approx_eq(&q, &expected));
    }

    #[test]
    fn spherical_coords_rotate_z_axis() {
        let (theta, phi) = (0.9_f64, 2.3_f64);
        let q = Quaternion::from_spherical_coords(theta, phi);
        let d = q.rotate(&[0.0, 0.0, 1.0]);
        let expected = [theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos()];
        assert!(vec_approx_eq(&d, &expected));

        let (t2, p2) = q.to_spherical_coords();
        assert!(approx_eq(t2, theta));
        assert!(approx_eq(p2, phi));
    }

    #[test]
    fn spherical_coords_are_euler_with_zero_gamma() {
        let q1 = Quaternion::from_spherical_coords(0.5, -1.2);
        let q2 = Quaternion::from_euler_angles(-1.2, 0.5, 0.0);
        assert!((q1 - q2).norm() < EPS);
    }

    #[test]
    fn rotate_vector_90_about_z() {
        let q = Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2);
        let r = q.rotate(&[1.0, 0.0, 0.0]);
        assert!(vec_approx_eq(&r, &[0.0, 1.0, 0.0]));
    }

    #[test]
    fn rotate_vector_180_about_y() {
        let q = Quaternion::from_axis_angle([0.0, 1.0, 0.0], PI);
        let r = q.rotate(&[1.0, 0.0, 0.0]);
        assert!(vec_approx_eq(&r, &[-1.0, 0.0, 0.0]));
    }

    #[test]
    fn negate_same_rotation() {
        let q = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 1.0);
        let v = [1.0, 0.0, 0.0];
        assert!(vec_approx_eq(&q.rotate(&v), &(-q).rotate(&v)));
    }

    #[test]
    fn composition_matches_sequential_rotation() {
        let q1 = Quaternion::from_axis_angle([1.0, 0.0, 0.0], FRAC_PI_2);
        let q2 = Quaternion::from_axis_angle([0.0, 1.0, 0.0], FRAC_PI_2);
        let v = [1.0, 2.0, 3.0];
        let r1 = (q2 * q1).rotate(&v);
        let r2 = q2.rotate(&q1.rotate(&v));
        assert!(vec_approx_eq(&r1, &r2));
    }

    #[test]
    fn rotation_matrix_roundtrip() {
        let s = 1.0 / 3.0_f64.sqrt();
        let q = Quaternion::from_axis_angle([s, s, s], 1.23);
        let m = q.to_rotation_matrix();
        assert!(quat_approx_eq(&q, &Quaternion::from_rotation_matrix(&m)));
    }

    #[test]
    fn rotation_matrix_matches_vector_rotation() {
        let q = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 0.8);
        let v = [1.0, 2.0, 3.0];
        let m = q.to_rotation_matrix();
        let r_mat = [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ];
        assert!(vec_approx_eq(&q.rotate(&v), &r_mat));
    }

    #[test]
    fn from_rotation_matrix_all_branches() {
        // Each axis near 180° makes a different diagonal element dominant
        for axis in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
            for angle in [0.1, PI - 0.01] {
                let q = Quaternion::from_axis_angle(axis, angle);
                let r = Quaternion::from_rotation_matrix(&q.to_rotation_matrix());
                assert!(quat_approx_eq(&q, &r), "axis {axis:?} angle {angle}");
            }
        }
    }

    #[test]
    fn axis_angle_roundtrip() {
        let q = Quaternion::from_axis_angle([0.0, 1.0, 0.0], 1.5);
        let (axis, angle) = q.to_axis_angle();
        assert!(approx_eq(angle, 1.5));
        assert!(vec_approx_eq(&axis, &[0.0, 1.0, 0.0]));

        let (_, angle) = Quaternion::<f64>::identity().to_axis_angle();
        assert!(approx_eq(angle, 0.0));
    }

    #[test]
    fn f32_basic() {
        let q = Quaternion::from_axis_angle([0.0_f32, 0.0, 1.0], core::f32::consts::FRAC_PI_2);
        let r = q.rotate(&[1.0_f32, 0.0, 0.0]);
        assert!(r[0].abs() < 1e-6);
        assert!((r[1] - 1.0).abs() < 1e-6);
    }
}
