//! Element-wise binary combinations of two vectors.

use std::os::raw::c_int;

use log::trace;

use crate::element::Element;
use crate::error::{bad_code, require_same_len, Result};
use crate::opcode::ZipOp;

pub(crate) fn resolve<T: Element>(code: c_int) -> Result<fn(T, T) -> T> {
    ZipOp::from_code(code)
        .and_then(T::binary)
        .ok_or_else(|| bad_code("zip", code, T::KIND.name()))
}

/// Writes `r[k] = h(a[k], b[k])` for the operation `h` selected by `code`.
///
/// Real kinds accept 0 add, 1 subtract, 2 multiply, 3 divide, 4 `a ^ b` and
/// 5 `atan2(a, b)`. Complex kinds accept only 0.
///
/// # Errors
///
/// * `SizeMismatch` unless `a`, `b` and `r` all have the same length.
/// * `BadCode` if `code` is unknown or not defined for this kind.
///
/// # Examples
///
/// ```
/// let mut r = [0.0f64; 3];
/// vecaux::zip(0, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut r).unwrap();
/// assert_eq!(r, [5.0, 7.0, 9.0]);
/// ```
pub fn zip<T: Element>(code: c_int, a: &[T], b: &[T], r: &mut [T]) -> Result<()> {
    trace!("zip {}: code={} n={}", T::KIND, code, a.len());
    require_same_len("zip", &[a.len(), b.len(), r.len()])?;
    let h = resolve::<T>(code)?;
    for ((out, &x), &y) in r.iter_mut().zip(a).zip(b) {
        *out = h(x, y);
    }
    Ok(())
}

/// Same as [`zip`], overwriting `a` with the result.
pub fn zip_in_place<T: Element>(code: c_int, a: &mut [T], b: &[T]) -> Result<()> {
    trace!("zip_in_place {}: code={} n={}", T::KIND, code, a.len());
    require_same_len("zip", &[a.len(), b.len()])?;
    let h = resolve::<T>(code)?;
    for (x, &y) in a.iter_mut().zip(b) {
        *x = h(*x, y);
    }
    Ok(())
}
