//! Element-wise transforms against one broadcast scalar.

use std::os::raw::c_int;

use log::trace;

use crate::element::Element;
use crate::error::{bad_code, require_same_len, Result};
use crate::opcode::MapValOp;

pub(crate) fn resolve<T: Element>(code: c_int) -> Result<fn(T, T) -> T> {
    MapValOp::from_code(code)
        .and_then(T::with_scalar)
        .ok_or_else(|| bad_code("map_val", code, T::KIND.name()))
}

/// Writes `r[k] = g(val, x[k])` for the operation `g` selected by `code`.
///
/// Real kinds accept 0 `val * x`, 1 `val / x`, 2 `val + x`, 3 `val - x`,
/// 4 `val ^ x` and 5 `x ^ val`. Complex kinds accept only 2.
///
/// # Errors
///
/// * `SizeMismatch` if `x` and `r` differ in length.
/// * `BadCode` if `code` is unknown or not defined for this kind.
pub fn map_val<T: Element>(code: c_int, val: T, x: &[T], r: &mut [T]) -> Result<()> {
    trace!("map_val {}: code={} n={}", T::KIND, code, x.len());
    require_same_len("map_val", &[x.len(), r.len()])?;
    let g = resolve::<T>(code)?;
    for (out, &v) in r.iter_mut().zip(x) {
        *out = g(val, v);
    }
    Ok(())
}

/// Same as [`map_val`], overwriting `x` with the result.
pub fn map_val_in_place<T: Element>(code: c_int, val: T, x: &mut [T]) -> Result<()> {
    trace!("map_val_in_place {}: code={} n={}", T::KIND, code, x.len());
    let g = resolve::<T>(code)?;
    for v in x.iter_mut() {
        *v = g(val, *v);
    }
    Ok(())
}
