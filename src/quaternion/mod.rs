//! Quaternion value type and its algebra.
//!
//! [`Quaternion<T>`] stores four components in scalar-first order
//! `(w, x, y, z)`, read as `w + x·i + y·j + z·k`. The struct is `#[repr(C)]`,
//! so a slice of quaternions is a slice of `4·len` contiguous floats in that
//! order.
//!
//! The algebra lives in submodules:
//! - arithmetic operators (`+`, `-`, `*`, `/`, negation, scalar forms)
//! - [`Quaternion::exp`], [`Quaternion::ln`], powers and square roots
//! - rotation conversions (Euler angles, spherical coordinates, axis-angle,
//!   rotation vector, rotation matrix)
//!
//! # Example
//!
//! ```
//! use versor::Quaternion;
//!
//! let i = Quaternion::<f64>::i();
//! let j = Quaternion::<f64>::j();
//! assert_eq!(i * j, Quaternion::k());
//! assert_eq!(j * i, -Quaternion::k());
//! ```

mod algebra;
mod convert;
mod ops;

pub use convert::{from_euler_angles, from_spherical_coords};

use num_traits::{One, Zero};

use crate::traits::FloatScalar;

/// Quaternion `w + x·i + y·j + z·k`.
///
/// Scalar-first convention: `w` is the scalar part and `(x, y, z)` the vector
/// part. Equality is component-wise, so `q != -q` even though both represent
/// the same rotation; use [`rotation_intrinsic_distance`](crate::rotation_intrinsic_distance)
/// to compare rotations. Ordering is lexicographic on `(w, x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[repr(C)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

/// The zero quaternion `(0, 0, 0, 0)`.
pub const ZERO: Quaternion<f64> = Quaternion { w: 0.0, x: 0.0, y: 0.0, z: 0.0 };
/// The identity rotation `(1, 0, 0, 0)`.
pub const ONE: Quaternion<f64> = Quaternion { w: 1.0, x: 0.0, y: 0.0, z: 0.0 };
/// The imaginary unit `i = (0, 1, 0, 0)`.
pub const X: Quaternion<f64> = Quaternion { w: 0.0, x: 1.0, y: 0.0, z: 0.0 };
/// The imaginary unit `j = (0, 0, 1, 0)`.
pub const Y: Quaternion<f64> = Quaternion { w: 0.0, x: 0.0, y: 1.0, z: 0.0 };
/// The imaginary unit `k = (0, 0, 0, 1)`.
pub const Z: Quaternion<f64> = Quaternion { w: 0.0, x: 0.0, y: 0.0, z: 1.0 };

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from components.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Create from a `[w, x, y, z]` array.
    #[inline]
    pub fn from_array(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Components as `[w, x, y, z]`.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Pure quaternion `(0, v)`.
    #[inline]
    pub fn from_vector(v: [T; 3]) -> Self {
        Self::new(T::zero(), v[0], v[1], v[2])
    }

    /// Real quaternion `(s, 0, 0, 0)`.
    #[inline]
    pub fn from_scalar(s: T) -> Self {
        Self::new(s, T::zero(), T::zero(), T::zero())
    }

    /// The zero quaternion.
    #[inline]
    pub fn zero() -> Self {
        Self::from_scalar(T::zero())
    }

    /// The multiplicative identity, `1`.
    #[inline]
    pub fn one() -> Self {
        Self::from_scalar(T::one())
    }

    /// Identity quaternion (no rotation). Same as [`Quaternion::one`].
    #[inline]
    pub fn identity() -> Self {
        Self::one()
    }

    /// Imaginary unit `i`.
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    /// Imaginary unit `j`.
    #[inline]
    pub fn j() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// Imaginary unit `k`.
    #[inline]
    pub fn k() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

// ── Accessors and predicates ─────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Scalar part `w`.
    #[inline]
    pub fn scalar(&self) -> T {
        self.w
    }

    /// Vector part `[x, y, z]`.
    #[inline]
    pub fn vector(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Norm of the vector part.
    #[inline]
    pub fn vector_norm(&self) -> T {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// True if any component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.w.is_nan() || self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// True if any component is infinite.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.w.is_infinite() || self.x.is_infinite() || self.y.is_infinite() || self.z.is_infinite()
    }

    /// True if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// True if any component is non-zero.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        self.w != T::zero() || self.x != T::zero() || self.y != T::zero() || self.z != T::zero()
    }
}

impl<T: FloatScalar> Zero for Quaternion<T> {
    #[inline]
    fn zero() -> Self {
        Quaternion::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        !self.is_nonzero()
    }
}

impl<T: FloatScalar> One for Quaternion<T> {
    #[inline]
    fn one() -> Self {
        Quaternion::one()
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constants() {
        assert_eq!(ZERO, Quaternion::zero());
        assert_eq!(ONE, Quaternion::one());
        assert_eq!(X, Quaternion::i());
        assert_eq!(Y, Quaternion::j());
        assert_eq!(Z, Quaternion::k());
        assert_eq!(Quaternion::<f64>::identity(), ONE);
    }

    #[test]
    fn array_roundtrip() {
        let q = Quaternion::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.scalar(), 1.0);
        assert_eq!(q.vector(), [2.0, 3.0, 4.0]);
    }

    #[test]
    fn predicates() {
        let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        assert!(q.is_finite());
        assert!(!q.is_nan());
        assert!(q.is_nonzero());
        assert!(!ZERO.is_nonzero());

        let n = Quaternion::new(0.0, f64::NAN, 0.0, 0.0);
        assert!(n.is_nan());
        assert!(!n.is_finite());

        let inf = Quaternion::new(0.0, 0.0, 0.0, f64::INFINITY);
        assert!(inf.is_infinite());
        assert!(!inf.is_finite());
    }

    #[test]
    fn num_traits_identities() {
        let q = Quaternion::new(0.5, -1.0, 2.0, 0.25);
        assert_eq!(q * <Quaternion<f64> as One>::one(), q);
        assert_eq!(q + <Quaternion<f64> as Zero>::zero(), q);
        assert!(<Quaternion<f64> as Zero>::zero().is_zero());
    }

    #[test]
    fn lexicographic_order() {
        let a = Quaternion::new(1.0, 0.0, 0.0, 0.0);
        let b = Quaternion::new(1.0, 0.0, 1.0, 0.0);
        let c = Quaternion::new(2.0, -5.0, 0.0, 0.0);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn display() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let s = format!("{}", q);
        assert_eq!(s, "(1 + 2i + 3j + 4k)");
    }
}
