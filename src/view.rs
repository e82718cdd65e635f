//! Zero-copy reinterpretation between quaternion and float slices.
//!
//! `Quaternion<T>` is `#[repr(C)]` with four `T` fields and no padding, so a
//! `[Quaternion<T>]` of length `n` has exactly the layout of a `[T]` of length
//! `4n` in `(w, x, y, z)` order. These views convert between the two without
//! copying, through `bytemuck`.
//!
//! ```
//! use versor::Quaternion;
//! use versor::view::{as_float_slice, as_quat_slice};
//!
//! let qs = [Quaternion::new(1.0_f64, 2.0, 3.0, 4.0), Quaternion::new(5.0, 6.0, 7.0, 8.0)];
//! assert_eq!(as_float_slice(&qs), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
//!
//! let flat = [0.0_f64, 1.0, 0.0, 0.0];
//! assert_eq!(as_quat_slice(&flat).unwrap(), &[Quaternion::i()]);
//! assert!(as_quat_slice(&flat[..3]).is_err());
//! ```

use bytemuck::{Pod, Zeroable};

use crate::quaternion::Quaternion;

// SAFETY: `Quaternion<T>` is `#[repr(C)]` with four fields of the same type
// `T`, so it has no padding, and every bit pattern is valid when it is valid
// for `T`.
unsafe impl<T: Zeroable> Zeroable for Quaternion<T> {}
unsafe impl<T: Pod> Pod for Quaternion<T> {}

/// Errors from float-to-quaternion views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Slice length is not a multiple of four.
    Length {
        /// Length of the float slice.
        len: usize,
    },
    /// Slice is not aligned for the quaternion type.
    Alignment,
}

impl core::fmt::Display for ViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViewError::Length { len } => write!(
                f,
                "float slice of length {} is not a whole number of quaternions",
                len
            ),
            ViewError::Alignment => write!(f, "float slice is misaligned for quaternions"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ViewError {}

fn check_len(len: usize) -> Result<(), ViewError> {
    if len % 4 == 0 {
        Ok(())
    } else {
        Err(ViewError::Length { len })
    }
}

/// View quaternions as `4·len` floats.
#[inline]
pub fn as_float_slice<T: Pod>(qs: &[Quaternion<T>]) -> &[T] {
    bytemuck::cast_slice(qs)
}

/// Mutable float view; writes go straight to the quaternion components.
#[inline]
pub fn as_float_slice_mut<T: Pod>(qs: &mut [Quaternion<T>]) -> &mut [T] {
    bytemuck::cast_slice_mut(qs)
}

/// View floats as quaternions, four per element.
pub fn as_quat_slice<T: Pod>(fs: &[T]) -> Result<&[Quaternion<T>], ViewError> {
    check_len(fs.len())?;
    bytemuck::try_cast_slice(fs).map_err(|_| ViewError::Alignment)
}

/// Mutable quaternion view of a float slice.
pub fn as_quat_slice_mut<T: Pod>(fs: &mut [T]) -> Result<&mut [Quaternion<T>], ViewError> {
    check_len(fs.len())?;
    bytemuck::try_cast_slice_mut(fs).map_err(|_| ViewError::Alignment)
}

/// Raw bytes of a quaternion slice, in native endianness.
#[inline]
pub fn as_bytes<T: Pod>(qs: &[Quaternion<T>]) -> &[u8] {
    bytemuck::cast_slice(qs)
}
