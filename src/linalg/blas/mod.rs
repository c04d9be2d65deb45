//! Level-1 BLAS primitives used by the scalar-extraction kernels.
//!
//! These follow the reference BLAS conventions: an element count `n`, a
//! slice and a stride `incx`. Misuse (zero stride with `n > 1`, a slice too
//! short for the requested span) panics, like the rest of the BLAS ports.

pub mod asum;
pub mod nrm2;

pub use asum::{asum, casum};
pub use nrm2::{cnrm2, nrm2};

/// Panics unless `len` elements are enough for `n >= 1` elements at stride `incx`.
pub(crate) fn validate_vector(routine: &str, n: usize, len: usize, incx: isize) {
    if n > 1 && incx == 0 {
        panic!("{routine}: incx is 0 but n > 1, which is ambiguous or an error condition.");
    }

    let required_len = 1 + (n - 1) * incx.unsigned_abs();
    if len < required_len {
        panic!(
            "{routine}: x slice length {len} is insufficient for n={n} and incx={incx}. Required: {required_len}"
        );
    }
}

/// Indices visited by a BLAS loop over `n` elements with stride `incx`.
///
/// A negative stride starts from the far end, as in reference BLAS.
pub(crate) fn strided_indices(n: usize, incx: isize) -> impl Iterator<Item = usize> {
    let step = incx.unsigned_abs();
    let start = if incx < 0 { (n - 1) * step } else { 0 };
    (0..n).map(move |i| if incx < 0 { start - i * step } else { start + i * step })
}
