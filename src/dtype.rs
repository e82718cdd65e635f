//! Element-type descriptors for embedding quaternions in host array systems.
//!
//! An [`ElementType`] describes the fixed binary layout of an element: four
//! contiguous floats in `(w, x, y, z)` order for the quaternion types. A
//! [`Registry`] is an explicit install table owned by the embedding
//! application; installing the same type twice is rejected, while
//! [`Registry::ensure_registered`] is the idempotent form for one-time setup.
//!
//! ```
//! use versor::Quaternion;
//! use versor::dtype::{Registry, RegistryError};
//!
//! let mut registry = Registry::new();
//! let ty = registry.register::<Quaternion<f64>>().unwrap();
//! assert_eq!(ty.itemsize, 32);
//! assert_eq!(ty.fields, ["w", "x", "y", "z"]);
//!
//! assert!(matches!(
//!     registry.register::<Quaternion<f64>>(),
//!     Err(RegistryError::AlreadyRegistered { .. })
//! ));
//! assert_eq!(registry.ensure_registered::<Quaternion<f64>>().name, "quaternion");
//! ```

use alloc::collections::BTreeMap;
use core::any::TypeId;

use crate::quaternion::Quaternion;

/// Layout descriptor of an array element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementType {
    /// Type name as seen by the host system.
    pub name: &'static str,
    /// One-character type code.
    pub kind: char,
    /// Size of one element in bytes.
    pub itemsize: usize,
    /// Required alignment in bytes.
    pub alignment: usize,
    /// Name of the component scalar type.
    pub scalar: &'static str,
    /// Component names in memory order.
    pub fields: [&'static str; 4],
}

/// Types with a fixed, registrable layout.
pub trait Element: Copy + 'static {
    const ELEMENT_TYPE: ElementType;
}

const FIELDS: [&str; 4] = ["w", "x", "y", "z"];

impl Element for Quaternion<f64> {
    const ELEMENT_TYPE: ElementType = ElementType {
        name: "quaternion",
        kind: 'q',
        itemsize: core::mem::size_of::<Self>(),
        alignment: core::mem::align_of::<Self>(),
        scalar: "f64",
        fields: FIELDS,
    };
}

impl Element for Quaternion<f32> {
    const ELEMENT_TYPE: ElementType = ElementType {
        name: "quaternion32",
        kind: 'q',
        itemsize: core::mem::size_of::<Self>(),
        alignment: core::mem::align_of::<Self>(),
        scalar: "f32",
        fields: FIELDS,
    };
}

/// Errors from element-type registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The type was installed before.
    AlreadyRegistered {
        /// Name of the element type.
        name: &'static str,
    },
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistryError::AlreadyRegistered { name } => {
                write!(f, "element type '{}' is already registered", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

/// Table of installed element types, keyed by Rust type.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: BTreeMap<TypeId, ElementType>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Install `E`.
    ///
    /// Returns `RegistryError::AlreadyRegistered` if `E` is already
    /// installed; the existing entry is left untouched.
    pub fn register<E: Element>(&mut self) -> Result<&ElementType, RegistryError> {
        let ty = E::ELEMENT_TYPE;
        if self.types.contains_key(&TypeId::of::<E>()) {
            log::warn!("element type '{}' is already registered", ty.name);
            return Err(RegistryError::AlreadyRegistered { name: ty.name });
        }
        log::debug!(
            "registered element type '{}' ({} bytes, align {})",
            ty.name,
            ty.itemsize,
            ty.alignment
        );
        Ok(&*self.types.entry(TypeId::of::<E>()).or_insert(ty))
    }

    /// Install `E` unless it is already present.
    pub fn ensure_registered<E: Element>(&mut self) -> &ElementType {
        self.types
            .entry(TypeId::of::<E>())
            .or_insert_with(|| {
                log::debug!("registered element type '{}'", E::ELEMENT_TYPE.name);
                E::ELEMENT_TYPE
            })
    }

    /// Descriptor of `E`, if installed.
    pub fn get<E: Element>(&self) -> Option<&ElementType> {
        self.types.get(&TypeId::of::<E>())
    }

    /// Descriptor with the given name, if installed.
    pub fn lookup(&self, name: &str) -> Option<&ElementType> {
        self.types.values().find(|t| t.name == name)
    }

    pub fn contains<E: Element>(&self) -> bool {
        self.types.contains_key(&TypeId::of::<E>())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
