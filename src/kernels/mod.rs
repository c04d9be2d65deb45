//! Kernel families over caller-owned slices.
//!
//! Inputs are borrowed read-only, outputs are pre-sized by the caller and
//! written element by element. Nothing here allocates. Every length and
//! opcode check runs before the first write, so a failed call leaves the
//! output untouched.

pub mod map;
pub mod map_val;
pub mod reduce;
pub mod scalar;
pub mod zip;
