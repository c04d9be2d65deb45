//! Element-wise and reduction kernels over flat numeric vectors.
//!
//! `vecaux` is the arithmetic core under a higher-level array library. The
//! host owns every buffer and passes plain slices; the kernels validate
//! lengths and opcodes, then write the caller's output without allocating.
//!
//! Four element kinds are supported: `f32`, `f64`, [`Complex32`] and
//! [`Complex64`]. Complex kinds support a subset of the operations.
//!
//! | family        | entry point                      | shape                    |
//! |---------------|----------------------------------|--------------------------|
//! | reduction     | [`sum`], [`prod`]                | `x -> r[0]`              |
//! | extraction    | [`to_scalar`]                    | `x -> r[0]` (real)       |
//! | map           | [`map`], [`map_in_place`]        | `r[k] = f(x[k])`         |
//! | map with value| [`map_val`], [`map_val_in_place`]| `r[k] = g(val, x[k])`    |
//! | zip           | [`zip`], [`zip_in_place`]        | `r[k] = h(a[k], b[k])`   |
//!
//! The same kernels are exported to C from [`capi`], returning the integer
//! status codes in [`error`].
//!
//! # Examples
//!
//! ```
//! use vecaux::Complex64;
//!
//! let x = [Complex64::new(3.0, 4.0), Complex64::new(0.0, 0.0)];
//! let mut r = [Complex64::new(0.0, 0.0); 2];
//! vecaux::map(15, &x, &mut r).unwrap();
//! assert!((r[0].re - 0.6).abs() < 1e-12 && (r[0].im - 0.8).abs() < 1e-12);
//! assert_eq!(r[1], Complex64::new(0.0, 0.0));
//!
//! let err = vecaux::map(0, &x, &mut r).unwrap_err();
//! assert_eq!(err.status(), vecaux::error::BAD_CODE);
//! ```

pub mod capi;
pub mod element;
pub mod error;
pub mod kernels;
pub mod linalg;
pub mod opcode;

pub use element::{Element, ElementKind};
pub use error::{Result, VecauxError};
pub use kernels::map::{map, map_in_place};
pub use kernels::map_val::{map_val, map_val_in_place};
pub use kernels::reduce::{prod, sum};
pub use kernels::scalar::to_scalar;
pub use kernels::zip::{zip, zip_in_place};
pub use num::complex::{Complex, Complex32, Complex64};
pub use opcode::{MapOp, MapValOp, ScalarOp, ZipOp};
