//! Element-wise unary transforms.

use std::os::raw::c_int;

use log::trace;

use crate::element::Element;
use crate::error::{bad_code, require_same_len, Result};
use crate::opcode::MapOp;

pub(crate) fn resolve<T: Element>(code: c_int) -> Result<fn(T) -> T> {
    MapOp::from_code(code)
        .and_then(T::unary)
        .ok_or_else(|| bad_code("map", code, T::KIND.name()))
}

/// Writes `r[k] = f(x[k])` for the transform `f` selected by `code`.
///
/// Real kinds accept 0 sin, 1 cos, 2 tan, 3 abs, 4 asin, 5 acos, 6 atan,
/// 7 sinh, 8 cosh, 9 tanh, 13 exp, 14 ln, 15 sign and 16 sqrt. Complex
/// kinds accept 3 (magnitude, as a complex value with zero imaginary part)
/// and 15 (unit phase, zero stays zero).
///
/// # Errors
///
/// * `SizeMismatch` if `x` and `r` differ in length.
/// * `BadCode` if `code` is unknown, reserved (10-12), or not defined for this kind.
///
/// # Examples
///
/// ```
/// let x = [-2.0f32, 0.0, 7.5];
/// let mut r = [0.0f32; 3];
/// vecaux::map(15, &x, &mut r).unwrap();
/// assert_eq!(r, [-1.0, 0.0, 1.0]);
/// ```
pub fn map<T: Element>(code: c_int, x: &[T], r: &mut [T]) -> Result<()> {
    trace!("map {}: code={} n={}", T::KIND, code, x.len());
    require_same_len("map", &[x.len(), r.len()])?;
    let f = resolve::<T>(code)?;
    for (out, &v) in r.iter_mut().zip(x) {
        *out = f(v);
    }
    Ok(())
}

/// Same as [`map`], overwriting `x` with the result.
pub fn map_in_place<T: Element>(code: c_int, x: &mut [T]) -> Result<()> {
    trace!("map_in_place {}: code={} n={}", T::KIND, code, x.len());
    let f = resolve::<T>(code)?;
    for v in x.iter_mut() {
        *v = f(*v);
    }
    Ok(())
}
