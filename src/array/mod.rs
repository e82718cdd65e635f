//! N-dimensional arrays with NumPy-style broadcasting, and batch forms of the
//! scalar quaternion operations.
//!
//! [`Array<T>`] is a shape plus row-major `Vec<T>` storage. The scalar
//! formulas of the crate are written once per element and lifted to arrays
//! with [`zip_with`] / [`zip3_with`] (and [`Array::map`] for unary
//! operations). Operand shapes are aligned at their trailing axes; each pair
//! of axis lengths must be equal or contain a 1, and the output takes the
//! larger length.
//!
//! # Example
//!
//! ```
//! use versor::Quaternion;
//! use versor::array::{self, Array};
//!
//! let q0 = Array::from(vec![Quaternion::<f64>::one(); 3]);
//! let q1 = Array::scalar(Quaternion::i());
//! let tau = Array::from_vec(vec![2, 1], vec![0.0, 1.0]).unwrap();
//! let out = array::slerp(&q0, &q1, &tau).unwrap();
//! assert_eq!(out.shape(), &[2, 3]);
//! assert!((out[&[1, 2]] - Quaternion::i()).norm() < 1e-14);
//! ```

mod batch;

pub use batch::*;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// Errors from array construction and broadcasting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayError {
    /// Data length does not match the product of the shape.
    ShapeMismatch {
        /// Element count implied by the shape.
        expected: usize,
        /// Element count supplied.
        got: usize,
    },
    /// Two operand shapes cannot be broadcast together.
    Broadcast,
    /// An input element has a NaN or infinite component.
    NonFinite,
}

impl core::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArrayError::ShapeMismatch { expected, got } => write!(
                f,
                "shape mismatch: shape holds {} elements, got {}",
                expected, got
            ),
            ArrayError::Broadcast => write!(f, "operands could not be broadcast together"),
            ArrayError::NonFinite => write!(f, "input contains non-finite values"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArrayError {}

/// Heap-allocated N-dimensional array in row-major order.
///
/// A zero-dimensional array (empty shape) holds exactly one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> Array<T> {
    /// Wrap `data` with the given shape.
    ///
    /// Returns `ArrayError::ShapeMismatch` if the lengths disagree.
    pub fn from_vec(shape: Vec<usize>, data: Vec<T>) -> Result<Self, ArrayError> {
        let expected = shape.iter().product::<usize>();
        if expected != data.len() {
            return Err(ArrayError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Zero-dimensional array holding `value`.
    pub fn scalar(value: T) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Array of the given shape with every element set to `value`.
    pub fn full(shape: Vec<usize>, value: T) -> Self
    where
        T: Clone,
    {
        let n = shape.iter().product::<usize>();
        Self {
            shape,
            data: vec![value; n],
        }
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major element storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Same data under a new shape with the same element count.
    pub fn reshape(self, shape: Vec<usize>) -> Result<Self, ArrayError> {
        Self::from_vec(shape, self.data)
    }

    /// Flat offset of a multi-index, or `None` if it is out of bounds.
    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut off = 0;
        for (&i, &n) in index.iter().zip(&self.shape) {
            if i >= n {
                return None;
            }
            off = off * n + i;
        }
        Some(off)
    }

    /// Element at a multi-index.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).map(|o| &self.data[o])
    }

    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        self.offset(index).map(move |o| &mut self.data[o])
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Array<U> {
        Array {
            shape: self.shape.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> From<Vec<T>> for Array<T> {
    /// One-dimensional array.
    fn from(data: Vec<T>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }
}

impl<T> Index<&[usize]> for Array<T> {
    type Output = T;

    /// Panics if the index is out of bounds.
    fn index(&self, index: &[usize]) -> &T {
        match self.offset(index) {
            Some(o) => &self.data[o],
            None => panic!("index {:?} out of bounds for shape {:?}", index, self.shape),
        }
    }
}

impl<T, const K: usize> Index<&[usize; K]> for Array<T> {
    type Output = T;

    fn index(&self, index: &[usize; K]) -> &T {
        &self[&index[..]]
    }
}

impl<T> IndexMut<&[usize]> for Array<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut T {
        match self.offset(index) {
            Some(o) => &mut self.data[o],
            None => panic!("index {:?} out of bounds for shape {:?}", index, self.shape),
        }
    }
}

impl<T, const K: usize> IndexMut<&[usize; K]> for Array<T> {
    fn index_mut(&mut self, index: &[usize; K]) -> &mut T {
        &mut self[&index[..]]
    }
}

/// Shape resulting from broadcasting two shapes together.
///
/// ```
/// use versor::array::broadcast_shape;
///
/// assert_eq!(broadcast_shape(&[4, 1, 3], &[2, 1]).unwrap(), vec![4, 2, 3]);
/// assert!(broadcast_shape(&[2, 3], &[4]).is_err());
/// ```
pub fn broadcast_shape(a: &[usize], b: &[usize]) -> Result<Vec<usize>, ArrayError> {
    let ndim = a.len().max(b.len());
    let mut out = vec![0; ndim];
    for (k, o) in out.iter_mut().enumerate() {
        // align at trailing axes; missing leading axes act as length 1
        let da = (k + a.len()).checked_sub(ndim).map_or(1, |i| a[i]);
        let db = (k + b.len()).checked_sub(ndim).map_or(1, |i| b[i]);
        *o = if da == db || db == 1 {
            da
        } else if da == 1 {
            db
        } else {
            return Err(ArrayError::Broadcast);
        };
    }
    Ok(out)
}

/// Joint iteration plan over `K` broadcast operands.
struct Broadcast<const K: usize> {
    shape: Vec<usize>,
    // per operand, the flat-storage stride of each output axis (0 when
    // broadcast along it)
    strides: [Vec<usize>; K],
}

impl<const K: usize> Broadcast<K> {
    fn new(shapes: [&[usize]; K]) -> Result<Self, ArrayError> {
        let mut shape: Vec<usize> = Vec::new();
        for s in shapes {
            shape = broadcast_shape(&shape, s)?;
        }
        let ndim = shape.len();
        let strides = shapes.map(|s| {
            let mut st = vec![0; ndim];
            let mut stride = 1;
            for (k, &n) in s.iter().enumerate().rev() {
                if n != 1 {
                    st[ndim - s.len() + k] = stride;
                }
                stride *= n;
            }
            st
        });
        Ok(Self { shape, strides })
    }

    /// Call `f` with each operand's flat offset, in row-major output order.
    fn for_each(&self, mut f: impl FnMut([usize; K])) {
        let total: usize = self.shape.iter().product();
        if total == 0 {
            return;
        }
        let ndim = self.shape.len();
        let mut index = vec![0; ndim];
        let mut offsets = [0usize; K];
        for _ in 0..total {
            f(offsets);
            // odometer increment, updating offsets incrementally
            for axis in (0..ndim).rev() {
                index[axis] += 1;
                for (o, st) in offsets.iter_mut().zip(&self.strides) {
                    *o += st[axis];
                }
                if index[axis] < self.shape[axis] {
                    break;
                }
                for (o, st) in offsets.iter_mut().zip(&self.strides) {
                    *o -= st[axis] * self.shape[axis];
                }
                index[axis] = 0;
            }
        }
    }
}

/// Apply `f` element-wise to two broadcast operands.
///
/// ```
/// use versor::array::{zip_with, Array};
///
/// let a = Array::from(vec![1.0_f64, 2.0, 3.0]);
/// let b = Array::from_vec(vec![2, 1], vec![10.0, 20.0]).unwrap();
/// let c = zip_with(&a, &b, |x, y| x + y).unwrap();
/// assert_eq!(c.shape(), &[2, 3]);
/// assert_eq!(c.as_slice(), &[11.0, 12.0, 13.0, 21.0, 22.0, 23.0]);
/// ```
pub fn zip_with<A, B, U>(
    a: &Array<A>,
    b: &Array<B>,
    mut f: impl FnMut(&A, &B) -> U,
) -> Result<Array<U>, ArrayError> {
    let plan = Broadcast::new([a.shape(), b.shape()])?;
    let mut data = Vec::with_capacity(plan.shape.iter().product());
    plan.for_each(|[i, j]| data.push(f(&a.data[i], &b.data[j])));
    Ok(Array {
        shape: plan.shape,
        data,
    })
}

/// Apply `f` element-wise to three broadcast operands.
pub fn zip3_with<A, B, C, U>(
    a: &Array<A>,
    b: &Array<B>,
    c: &Array<C>,
    mut f: impl FnMut(&A, &B, &C) -> U,
) -> Result<Array<U>, ArrayError> {
    let plan = Broadcast::new([a.shape(), b.shape(), c.shape()])?;
    let mut data = Vec::with_capacity(plan.shape.iter().product());
    plan.for_each(|[i, j, k]| data.push(f(&a.data[i], &b.data[j], &c.data[k])));
    Ok(Array {
        shape: plan.shape,
        data,
    })
}

/// Apply `f` element-wise to five broadcast operands.
pub(crate) fn zip5_with<A, B, C, D, E, U>(
    ops: (&Array<A>, &Array<B>, &Array<C>, &Array<D>, &Array<E>),
    mut f: impl FnMut(&A, &B, &C, &D, &E) -> U,
) -> Result<Array<U>, ArrayError> {
    let (a, b, c, d, e) = ops;
    let plan = Broadcast::new([a.shape(), b.shape(), c.shape(), d.shape(), e.shape()])?;
    let mut data = Vec::with_capacity(plan.shape.iter().product());
    plan.for_each(|[i, j, k, l, m]| {
        data.push(f(&a.data[i], &b.data[j], &c.data[k], &d.data[l], &e.data[m]))
    });
    Ok(Array {
        shape: plan.shape,
        data,
    })
}
