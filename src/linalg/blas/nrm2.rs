use num::complex::Complex;
use num::Float;

use super::{strided_indices, validate_vector};

/// Folds one magnitude into the running `(scale, ssq)` pair.
///
/// `scale` tracks the largest magnitude seen so far and `ssq` accumulates
/// `(|x_i| / scale)^2`, so the sum of squares never overflows or underflows.
#[inline(always)]
fn accumulate<F: Float>(value: F, scale: &mut F, ssq: &mut F) {
    if value != F::zero() {
        let abs_x = value.abs();
        if *scale < abs_x {
            // ssq := 1 + ssq * (scale/abs_x)^2
            *ssq = F::one() + *ssq * (*scale / abs_x).powi(2);
            *scale = abs_x;
        } else {
            *ssq = *ssq + (abs_x / *scale).powi(2);
        }
    }
}

/// Computes the Euclidean norm (L2 norm) of a real vector.
///
/// Mathematically, `nrm2(x) = sqrt(x[0]^2 + x[1]^2 + ... + x[n-1]^2)`.
/// The sum of squares is computed with the scaling algorithm of the BLAS
/// `snrm2`/`dnrm2` routines to prevent overflow and underflow.
///
/// # Arguments
///
/// * `n`: The number of elements in vector `x` to consider.
/// * `x`: A slice representing the input vector.
/// * `incx`: The increment (stride) for accessing elements in `x`.
///   A positive value means forward iteration, negative means backward.
///   Must not be zero if `n > 1`.
///
/// # Returns
///
/// The Euclidean norm of the selected elements of `x`, `0` if `n` is 0 or
/// all selected elements are zero.
///
/// # Panics
///
/// * `incx` is 0 and `n > 1`.
/// * The effective length required to access `n` elements in `x` (considering `incx`)
///   exceeds `x.len()`.
pub fn nrm2<F: Float>(n: usize, x: &[F], incx: isize) -> F {
    if n == 0 {
        return F::zero();
    }
    validate_vector("nrm2", n, x.len(), incx);

    if n == 1 {
        return x[0].abs();
    }

    let mut scale = F::zero();
    let mut ssq = F::one();

    if incx == 1 {
        for &val_x in &x[..n] {
            accumulate(val_x, &mut scale, &mut ssq);
        }
    } else {
        for ix in strided_indices(n, incx) {
            accumulate(x[ix], &mut scale, &mut ssq);
        }
    }

    // All elements zero leaves scale at 0, giving a 0 norm.
    scale * ssq.sqrt()
}

/// Computes the Euclidean norm of a complex vector, as BLAS `scnrm2`/`dznrm2`.
///
/// Real and imaginary parts are fed separately through the same scaled sum
/// of squares, so the result is `sqrt(sum |x_i|^2)`.
///
/// # Panics
///
/// Same conditions as [`nrm2`].
pub fn cnrm2<F: Float>(n: usize, x: &[Complex<F>], incx: isize) -> F {
    if n == 0 {
        return F::zero();
    }
    validate_vector("cnrm2", n, x.len(), incx);

    let mut scale = F::zero();
    let mut ssq = F::one();

    for ix in strided_indices(n, incx) {
        let z = x[ix];
        accumulate(z.re, &mut scale, &mut ssq);
        accumulate(z.im, &mut scale, &mut ssq);
    }

    scale * ssq.sqrt()
}
