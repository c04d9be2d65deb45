//! C entry points for the host array library.
//!
//! Each kernel is exported once per element kind as
//! `vecaux_<family>_<kind>(opcode?, len, ptr, ..., len, ptr) -> status`,
//! returning `0` on success, `2000` on a length violation and `2001` on an
//! unknown opcode. Complex elements cross the boundary as `{re, im}` pairs
//! (`Complex<T>` is `#[repr(C)]`).
//!
//! The element-wise entry points read `x[k]` before writing `r[k]` using raw
//! pointer accesses, so an output pointer equal to an input pointer is
//! allowed. Partially overlapping buffers are not.

use std::os::raw::c_int;

use log::trace;
use num::complex::Complex;

use crate::element::Element;
use crate::error::{require_same_len, require_scalar_output, size_mismatch, status_of, Result};
use crate::kernels::{map, map_val, reduce, scalar, zip};

/// Converts a C `(len, ptr)` pair into an element count.
fn vector_len<T>(kernel: &'static str, n: c_int, p: *const T) -> Result<usize> {
    let n = usize::try_from(n).map_err(|_| size_mismatch(kernel, format!("negative length {n}")))?;
    if n > 0 && p.is_null() {
        return Err(size_mismatch(kernel, format!("null buffer with length {n}")));
    }
    Ok(n)
}

/// # Safety
///
/// `p` must be valid for `n` reads, or `n` must be 0.
unsafe fn input_slice<'a, T>(n: usize, p: *const T) -> &'a [T] {
    if n == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(p, n)
    }
}

unsafe fn run_sum<T: Element>(xn: c_int, xp: *const T, rn: c_int, rp: *mut T) -> Result<()> {
    let rn = vector_len("sum", rn, rp)?;
    require_scalar_output("sum", rn)?;
    let xn = vector_len("sum", xn, xp)?;
    trace!("capi sum {}: n={}", T::KIND, xn);
    let value = reduce::fold_sum(input_slice(xn, xp));
    rp.write(value);
    Ok(())
}

unsafe fn run_prod<T: Element>(xn: c_int, xp: *const T, rn: c_int, rp: *mut T) -> Result<()> {
    let rn = vector_len("prod", rn, rp)?;
    require_scalar_output("prod", rn)?;
    let xn = vector_len("prod", xn, xp)?;
    trace!("capi prod {}: n={}", T::KIND, xn);
    let value = reduce::fold_prod(input_slice(xn, xp));
    rp.write(value);
    Ok(())
}

unsafe fn run_to_scalar<T: Element>(
    code: c_int,
    xn: c_int,
    xp: *const T,
    rn: c_int,
    rp: *mut T::Real,
) -> Result<()> {
    let rn = vector_len("to_scalar", rn, rp)?;
    require_scalar_output("to_scalar", rn)?;
    let xn = vector_len("to_scalar", xn, xp)?;
    trace!("capi to_scalar {}: code={} n={}", T::KIND, code, xn);
    let x = input_slice(xn, xp);
    let f = scalar::resolve::<T>(code, x)?;
    let value = f(x);
    rp.write(value);
    Ok(())
}

unsafe fn run_map<T: Element>(
    code: c_int,
    xn: c_int,
    xp: *const T,
    rn: c_int,
    rp: *mut T,
) -> Result<()> {
    let xn = vector_len("map", xn, xp)?;
    let rn = vector_len("map", rn, rp)?;
    require_same_len("map", &[xn, rn])?;
    trace!("capi map {}: code={} n={}", T::KIND, code, xn);
    let f = map::resolve::<T>(code)?;
    for k in 0..xn {
        let v = xp.add(k).read();
        rp.add(k).write(f(v));
    }
    Ok(())
}

unsafe fn run_map_val<T: Element>(
    code: c_int,
    vp: *const T,
    xn: c_int,
    xp: *const T,
    rn: c_int,
    rp: *mut T,
) -> Result<()> {
    let xn = vector_len("map_val", xn, xp)?;
    let rn = vector_len("map_val", rn, rp)?;
    require_same_len("map_val", &[xn, rn])?;
    if vp.is_null() {
        return Err(size_mismatch("map_val", "null scalar operand".to_string()));
    }
    trace!("capi map_val {}: code={} n={}", T::KIND, code, xn);
    let g = map_val::resolve::<T>(code)?;
    let val = vp.read();
    for k in 0..xn {
        let v = xp.add(k).read();
        rp.add(k).write(g(val, v));
    }
    Ok(())
}

unsafe fn run_zip<T: Element>(
    code: c_int,
    an: c_int,
    ap: *const T,
    bn: c_int,
    bp: *const T,
    rn: c_int,
    rp: *mut T,
) -> Result<()> {
    let an = vector_len("zip", an, ap)?;
    let bn = vector_len("zip", bn, bp)?;
    let rn = vector_len("zip", rn, rp)?;
    require_same_len("zip", &[an, bn, rn])?;
    trace!("capi zip {}: code={} n={}", T::KIND, code, an);
    let h = zip::resolve::<T>(code)?;
    for k in 0..an {
        let (x, y) = (ap.add(k).read(), bp.add(k).read());
        rp.add(k).write(h(x, y));
    }
    Ok(())
}

macro_rules! export_kind {
    (
        $t:ty, $real:ty,
        $sum:ident, $prod:ident, $to_scalar:ident,
        $map:ident, $map_val:ident, $zip:ident
    ) => {
        /// Sum of `x` into the length-1 buffer `r`.
        ///
        /// # Safety
        ///
        /// `xp` must be valid for `xn` reads and `rp` for `rn` writes.
        #[no_mangle]
        pub unsafe extern "C" fn $sum(xn: c_int, xp: *const $t, rn: c_int, rp: *mut $t) -> c_int {
            status_of(&run_sum(xn, xp, rn, rp))
        }

        /// Product of `x` into the length-1 buffer `r`.
        ///
        /// # Safety
        ///
        /// `xp` must be valid for `xn` reads and `rp` for `rn` writes.
        #[no_mangle]
        pub unsafe extern "C" fn $prod(xn: c_int, xp: *const $t, rn: c_int, rp: *mut $t) -> c_int {
            status_of(&run_prod(xn, xp, rn, rp))
        }

        /// Statistic `code` of `x` into the length-1 real buffer `r`.
        ///
        /// # Safety
        ///
        /// `xp` must be valid for `xn` reads and `rp` for `rn` writes.
        #[no_mangle]
        pub unsafe extern "C" fn $to_scalar(
            code: c_int,
            xn: c_int,
            xp: *const $t,
            rn: c_int,
            rp: *mut $real,
        ) -> c_int {
            status_of(&run_to_scalar::<$t>(code, xn, xp, rn, rp))
        }

        /// Unary transform `code` of `x` into `r`.
        ///
        /// # Safety
        ///
        /// `xp` must be valid for `xn` reads and `rp` for `rn` writes. `rp`
        /// may equal `xp` but must not otherwise overlap it.
        #[no_mangle]
        pub unsafe extern "C" fn $map(
            code: c_int,
            xn: c_int,
            xp: *const $t,
            rn: c_int,
            rp: *mut $t,
        ) -> c_int {
            status_of(&run_map(code, xn, xp, rn, rp))
        }

        /// Transform `code` of `x` against the scalar at `vp` into `r`.
        ///
        /// # Safety
        ///
        /// `vp` must be valid for one read. `xp` must be valid for `xn` reads
        /// and `rp` for `rn` writes. `rp` may equal `xp` but must not
        /// otherwise overlap it.
        #[no_mangle]
        pub unsafe extern "C" fn $map_val(
            code: c_int,
            vp: *const $t,
            xn: c_int,
            xp: *const $t,
            rn: c_int,
            rp: *mut $t,
        ) -> c_int {
            status_of(&run_map_val(code, vp, xn, xp, rn, rp))
        }

        /// Binary operation `code` of `a` and `b` into `r`.
        ///
        /// # Safety
        ///
        /// `ap`, `bp` must be valid for `an`, `bn` reads and `rp` for `rn`
        /// writes. `rp` may equal `ap` or `bp` but must not otherwise overlap them.
        #[no_mangle]
        pub unsafe extern "C" fn $zip(
            code: c_int,
            an: c_int,
            ap: *const $t,
            bn: c_int,
            bp: *const $t,
            rn: c_int,
            rp: *mut $t,
        ) -> c_int {
            status_of(&run_zip(code, an, ap, bn, bp, rn, rp))
        }
    };
}

export_kind!(
    f32, f32,
    vecaux_sum_f32, vecaux_prod_f32, vecaux_to_scalar_f32,
    vecaux_map_f32, vecaux_map_val_f32, vecaux_zip_f32
);
export_kind!(
    f64, f64,
    vecaux_sum_f64, vecaux_prod_f64, vecaux_to_scalar_f64,
    vecaux_map_f64, vecaux_map_val_f64, vecaux_zip_f64
);
export_kind!(
    Complex<f32>, f32,
    vecaux_sum_c32, vecaux_prod_c32, vecaux_to_scalar_c32,
    vecaux_map_c32, vecaux_map_val_c32, vecaux_zip_c32
);
export_kind!(
    Complex<f64>, f64,
    vecaux_sum_c64, vecaux_prod_c64, vecaux_to_scalar_c64,
    vecaux_map_c64, vecaux_map_val_c64, vecaux_zip_c64
);
