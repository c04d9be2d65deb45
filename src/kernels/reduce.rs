//! Whole-vector folds: sum and product.

use log::trace;

use crate::element::Element;
use crate::error::{require_scalar_output, Result};

/// Additive fold seeded with zero.
pub(crate) fn fold_sum<T: Element>(x: &[T]) -> T {
    let mut acc = T::zero();
    for &v in x {
        T::sum_into(&mut acc, v);
    }
    acc
}

/// Multiplicative fold seeded with one, applied left to right.
pub(crate) fn fold_prod<T: Element>(x: &[T]) -> T {
    let mut acc = T::one();
    for &v in x {
        T::product_into(&mut acc, v);
    }
    acc
}

/// Writes the sum of `x` into `r[0]`.
///
/// # Errors
///
/// `SizeMismatch` if `r` does not have length 1.
///
/// # Examples
///
/// ```
/// let mut r = [0.0f64];
/// vecaux::sum(&[1.0, 2.0, 3.5], &mut r).unwrap();
/// assert_eq!(r[0], 6.5);
/// ```
pub fn sum<T: Element>(x: &[T], r: &mut [T]) -> Result<()> {
    trace!("sum {}: n={}", T::KIND, x.len());
    require_scalar_output("sum", r.len())?;
    r[0] = fold_sum(x);
    Ok(())
}

/// Writes the product of `x` into `r[0]`.
///
/// Complex products use `(a+bi)(c+di) = (ac-bd) + (ad+bc)i` at each step.
///
/// # Errors
///
/// `SizeMismatch` if `r` does not have length 1.
pub fn prod<T: Element>(x: &[T], r: &mut [T]) -> Result<()> {
    trace!("prod {}: n={}", T::KIND, x.len());
    require_scalar_output("prod", r.len())?;
    r[0] = fold_prod(x);
    Ok(())
}
