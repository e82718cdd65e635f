//! # versor
//!
//! Quaternions for rotations, no-std compatible: algebra, rotation metrics,
//! SLERP and SQUAD interpolation, and calculus over irregularly sampled rotor
//! time series.
//!
//! ## Quick start
//!
//! ```
//! use versor::{rotation_intrinsic_distance, slerp, squad, Quaternion};
//!
//! let a = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.2_f64);
//! let b = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 1.0);
//!
//! // q and -q are the same rotation
//! assert_eq!(rotation_intrinsic_distance(&a, &-a), 0.0);
//!
//! let mid = slerp(&a, &b, 0.5);
//! assert!((rotation_intrinsic_distance(&a, &mid) - 0.4).abs() < 1e-14);
//!
//! // smooth interpolation through a time series
//! let t = [0.0, 1.0, 3.0];
//! let c = Quaternion::from_axis_angle([1.0, 0.0, 0.0], 0.5);
//! let out = squad(&[a, b, c], &t, &[0.5, 2.0]).unwrap();
//! assert_eq!(out.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`]: [`Quaternion<T>`] value type, scalar-first
//!   `(w, x, y, z)`, `#[repr(C)]`. Hamilton product and the usual operators,
//!   conjugate, norm, inverse, `exp`/`ln` with small-angle series, powers,
//!   square root, and conversions (z-y-z Euler angles, spherical coordinates,
//!   axis-angle, rotation vector, rotation matrix). Named constants
//!   [`ZERO`], [`ONE`], [`X`], [`Y`], [`Z`].
//!
//! - [`metrics`]: [`rotor_intrinsic_distance`], [`rotor_chordal_distance`],
//!   [`rotation_intrinsic_distance`], [`rotation_chordal_distance`].
//!
//! - [`interp`]: [`slerp`], the SQUAD segment [`squad_evaluate`], and SQUAD
//!   interpolants over rotor time series: fixed-size [`Squad`] (no heap),
//!   [`DynSquad`] and the [`squad`] function (require `alloc`).
//!
//! - [`calculus`]: angular velocity of rotor series ([`derivative`]),
//!   five-point finite differences of vector series, and trapezoidal
//!   indefinite / definite integrals.
//!
//! - [`array`]: N-dimensional `Array<T>` with NumPy-style broadcasting and
//!   batch forms of the operations above (requires `alloc`).
//!
//! - [`dtype`]: element-type descriptors and an explicit registry for
//!   installing the quaternion type into a host array system (requires
//!   `alloc`).
//!
//! - `view`: zero-copy views between `[Quaternion<T>]` and `[T]` (requires
//!   `bytemuck`).
//!
//! - [`traits`]: [`Scalar`] / [`FloatScalar`] element traits over `f32` and
//!   `f64`.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade:
//! interpolant construction and registry installs at `debug`, sign unflips at
//! `trace`, rejected duplicate registrations at `warn`. Install any logger in
//! the application to see them.
//!
//! ## Cargo features
//!
//! | Feature    | Default  | Description |
//! |------------|----------|-------------|
//! | `std`      | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`    | via std  | `DynSquad`, `squad`, allocating calculus forms, `array`, `dtype` |
//! | `libm`     | no       | Pure-Rust float fallback for `num-complex` (always on for `num-traits`) |
//! | `complex`  | no       | Spinor form `Quaternion::to_spinor` via `num-complex` |
//! | `bytemuck` | no       | `view` module, `Pod` / `Zeroable` for `Quaternion<T>` |
//! | `all`      | no       | All features: `std` + `complex` + `bytemuck` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod array;
pub mod calculus;
#[cfg(feature = "alloc")]
pub mod dtype;
pub mod interp;
pub mod metrics;
pub mod quaternion;
pub mod traits;
#[cfg(feature = "bytemuck")]
pub mod view;

pub use calculus::{
    definite_integral, derivative_into, finite_difference_into, indefinite_integral_into,
    integrate, CalculusError,
};
#[cfg(feature = "alloc")]
pub use calculus::{derivative, finite_difference, indefinite_integral};
pub use interp::{slerp, squad_evaluate, InterpError, Squad, SquadSettings};
#[cfg(feature = "alloc")]
pub use interp::{squad, DynSquad};
pub use metrics::{
    rotation_chordal_distance, rotation_intrinsic_distance, rotor_chordal_distance,
    rotor_intrinsic_distance,
};
pub use quaternion::{from_euler_angles, from_spherical_coords, Quaternion, ONE, X, Y, Z, ZERO};
pub use traits::{FloatScalar, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
