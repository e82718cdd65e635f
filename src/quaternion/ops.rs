use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Quaternion;
use crate::traits::FloatScalar;

// ── Component-wise addition / subtraction ───────────────────────────

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            w: self.w + rhs.w,
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            w: self.w - rhs.w,
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl<T: FloatScalar> AddAssign for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: FloatScalar> SubAssign for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Adding a scalar only touches the real part.
impl<T: FloatScalar> Add<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self { w: self.w + rhs, ..self }
    }
}

impl<T: FloatScalar> Sub<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self { w: self.w - rhs, ..self }
    }
}

// ── Hamilton product ────────────────────────────────────────────────

impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl<T: FloatScalar> Mul<Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: Quaternion<T>) -> Quaternion<T> {
        (*self).mul(rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        self.mul(*rhs)
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        (*self).mul(*rhs)
    }
}

impl<T: FloatScalar> MulAssign for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Right division: a / b = a * b⁻¹
impl<T: FloatScalar> Div for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: FloatScalar> DivAssign for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, s: T) -> Self {
        Self {
            w: self.w * s,
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl<T: FloatScalar> Div<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn div(self, s: T) -> Self {
        Self {
            w: self.w / s,
            x: self.x / s,
            y: self.y / s,
            z: self.z / s,
        }
    }
}

impl<T: FloatScalar> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: FloatScalar> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Mul<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;
                #[inline]
                fn mul(self, q: Quaternion<$t>) -> Quaternion<$t> {
                    q * self
                }
            }

            impl Add<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;
                #[inline]
                fn add(self, q: Quaternion<$t>) -> Quaternion<$t> {
                    q + self
                }
            }

            impl Sub<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;
                #[inline]
                fn sub(self, q: Quaternion<$t>) -> Quaternion<$t> {
                    -q + self
                }
            }

            // s / q = s * q⁻¹
            impl Div<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;
                #[inline]
                fn div(self, q: Quaternion<$t>) -> Quaternion<$t> {
                    q.inverse() * self
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64);

// ── Negation ────────────────────────────────────────────────────────

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        (*self).neg()
    }
}
