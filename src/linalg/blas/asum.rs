use num::complex::Complex;
use num::Float;

use super::{strided_indices, validate_vector};

/// Sums the absolute values of a real vector, as BLAS `sasum`/`dasum`.
///
/// # Arguments
///
/// * `n`: The number of elements in vector `x` to consider.
/// * `x`: A slice representing the input vector.
/// * `incx`: The increment (stride) for accessing elements in `x`.
///   Must not be zero if `n > 1`.
///
/// # Panics
///
/// * `incx` is 0 and `n > 1`.
/// * `x` is too short for `n` elements at stride `incx`.
pub fn asum<F: Float>(n: usize, x: &[F], incx: isize) -> F {
    if n == 0 {
        return F::zero();
    }
    validate_vector("asum", n, x.len(), incx);

    if incx == 1 {
        return x[..n].iter().fold(F::zero(), |acc, v| acc + v.abs());
    }
    strided_indices(n, incx).fold(F::zero(), |acc, ix| acc + x[ix].abs())
}

/// Sums `|re| + |im|` over a complex vector, as BLAS `scasum`/`dzasum`.
///
/// This is the BLAS 1-norm surrogate, not the sum of moduli.
///
/// # Panics
///
/// Same conditions as [`asum`].
pub fn casum<F: Float>(n: usize, x: &[Complex<F>], incx: isize) -> F {
    if n == 0 {
        return F::zero();
    }
    validate_vector("casum", n, x.len(), incx);

    strided_indices(n, incx).fold(F::zero(), |acc, ix| {
        acc + x[ix].re.abs() + x[ix].im.abs()
    })
}
