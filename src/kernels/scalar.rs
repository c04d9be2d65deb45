//! Single-value statistics: norms, absolute sums and extrema.

use std::os::raw::c_int;

use log::trace;

use crate::element::Element;
use crate::error::{bad_code, require_scalar_output, size_mismatch, Result};
use crate::opcode::ScalarOp;

/// Decodes `code` and checks that `x` can feed the selected statistic.
pub(crate) fn resolve<T: Element>(code: c_int, x: &[T]) -> Result<fn(&[T]) -> T::Real> {
    let op = ScalarOp::from_code(code);
    let f = op
        .and_then(T::extractor)
        .ok_or_else(|| bad_code("to_scalar", code, T::KIND.name()))?;
    if x.is_empty() && op.is_some_and(ScalarOp::reads_first_element) {
        return Err(size_mismatch(
            "to_scalar",
            format!("opcode {code} needs at least one element"),
        ));
    }
    Ok(f)
}

/// Computes the statistic selected by `code` over `x` and writes it to `r[0]`.
///
/// | code | statistic                | kinds     |
/// |------|--------------------------|-----------|
/// | 0    | Euclidean norm           | all       |
/// | 1    | sum of absolute values   | all       |
/// | 2    | index of the maximum     | real only |
/// | 3    | maximum value            | real only |
/// | 4    | index of the minimum     | real only |
/// | 5    | minimum value            | real only |
///
/// The result is real even for complex vectors. Indices are written as
/// floating point values. Without the `exact-extremum-index` feature the index
/// statistics report the last position whose value is strictly greater (or
/// less) than `x[0]`, which is not always the global extremum. An empty
/// vector has index 0.
///
/// # Errors
///
/// * `SizeMismatch` if `r` does not have length 1, or if the maximum or
///   minimum value is requested on an empty vector.
/// * `BadCode` if `code` is unknown or not defined for this kind.
pub fn to_scalar<T: Element>(code: c_int, x: &[T], r: &mut [T::Real]) -> Result<()> {
    trace!("to_scalar {}: code={} n={}", T::KIND, code, x.len());
    require_scalar_output("to_scalar", r.len())?;
    let f = resolve::<T>(code, x)?;
    r[0] = f(x);
    Ok(())
}
