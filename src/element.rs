//! The four element kinds and the per-kind operation tables.
//!
//! Every kernel is generic over [`Element`] and monomorphized per kind, so a
//! single call never mixes precisions. The trait hands out plain function
//! pointers for each opcode; `None` means the operation is not defined for
//! that kind and the kernel reports a bad opcode.

use std::fmt;

use num::complex::Complex;
use num::Float;

use crate::linalg::blas::{asum, casum, cnrm2, nrm2};
use crate::opcode::{MapOp, MapValOp, ScalarOp, ZipOp};

/// Scalar representation stored in a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    F32,
    F64,
    C32,
    C64,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::C32 => "c32",
            ElementKind::C64 => "c64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A vector element: `f32`, `f64`, `Complex<f32>` or `Complex<f64>`.
pub trait Element: Copy + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Real type of the same precision, produced by scalar extraction.
    type Real: Float + fmt::Debug + Send + Sync + 'static;

    const KIND: ElementKind;

    fn zero() -> Self;

    fn one() -> Self;

    /// `acc += x`
    fn sum_into(acc: &mut Self, x: Self);

    /// `acc *= x`
    fn product_into(acc: &mut Self, x: Self);

    fn unary(op: MapOp) -> Option<fn(Self) -> Self>;

    /// Operations of the form `g(scalar, x)`.
    fn with_scalar(op: MapValOp) -> Option<fn(Self, Self) -> Self>;

    fn binary(op: ZipOp) -> Option<fn(Self, Self) -> Self>;

    fn extractor(op: ScalarOp) -> Option<fn(&[Self]) -> Self::Real>;
}

/// `+1`, `-1` or `0`, never a rounded value. `-0.0` and NaN map to `0`.
#[inline(always)]
pub fn sign<F: Float>(x: F) -> F {
    if x > F::zero() {
        F::one()
    } else if x < F::zero() {
        -F::one()
    } else {
        F::zero()
    }
}

#[inline(always)]
fn index_value<F: Float>(k: usize) -> F {
    F::from(k).unwrap_or_else(F::nan)
}

/// Running maximum seeded with `x[0]`.
fn max_value<F: Float>(x: &[F]) -> F {
    x[1..].iter().fold(x[0], |r, &v| if v > r { v } else { r })
}

/// Running minimum seeded with `x[0]`.
fn min_value<F: Float>(x: &[F]) -> F {
    x[1..].iter().fold(x[0], |r, &v| if v < r { v } else { r })
}

/// Last index whose value exceeds `x[0]`, or 0 if there is none.
///
/// Candidates are compared against the first element rather than the
/// running champion, which is what the host library has always returned.
#[cfg(not(feature = "exact-extremum-index"))]
fn max_index<F: Float>(x: &[F]) -> F {
    let Some(&first) = x.first() else {
        return F::zero();
    };
    let r = (1..x.len()).rev().find(|&k| x[k] > first).unwrap_or(0);
    index_value(r)
}

/// Last index whose value is below `x[0]`, or 0 if there is none.
#[cfg(not(feature = "exact-extremum-index"))]
fn min_index<F: Float>(x: &[F]) -> F {
    let Some(&first) = x.first() else {
        return F::zero();
    };
    let r = (1..x.len()).rev().find(|&k| x[k] < first).unwrap_or(0);
    index_value(r)
}

/// Index of the first occurrence of the maximum.
#[cfg(feature = "exact-extremum-index")]
fn max_index<F: Float>(x: &[F]) -> F {
    let mut r = 0;
    for k in 1..x.len() {
        if x[k] > x[r] {
            r = k;
        }
    }
    index_value(r)
}

/// Index of the first occurrence of the minimum.
#[cfg(feature = "exact-extremum-index")]
fn min_index<F: Float>(x: &[F]) -> F {
    let mut r = 0;
    for k in 1..x.len() {
        if x[k] < x[r] {
            r = k;
        }
    }
    index_value(r)
}

/// Real precisions whose transcendental functions are evaluated in `f64`
/// and rounded back, so `f32` results match the double-precision library.
pub(crate) trait Widen: Float {
    fn widen(self) -> f64;

    fn narrow(x: f64) -> Self;
}

impl Widen for f32 {
    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn narrow(x: f64) -> Self {
        x as f32
    }
}

impl Widen for f64 {
    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }

    #[inline(always)]
    fn narrow(x: f64) -> Self {
        x
    }
}

fn real_unary<F: Widen>(op: MapOp) -> Option<fn(F) -> F> {
    let f: fn(F) -> F = match op {
        MapOp::Sin => |x| F::narrow(x.widen().sin()),
        MapOp::Cos => |x| F::narrow(x.widen().cos()),
        MapOp::Tan => |x| F::narrow(x.widen().tan()),
        MapOp::Abs => F::abs,
        MapOp::Asin => |x| F::narrow(x.widen().asin()),
        MapOp::Acos => |x| F::narrow(x.widen().acos()),
        MapOp::Atan => |x| F::narrow(x.widen().atan()),
        MapOp::Sinh => |x| F::narrow(x.widen().sinh()),
        MapOp::Cosh => |x| F::narrow(x.widen().cosh()),
        MapOp::Tanh => |x| F::narrow(x.widen().tanh()),
        MapOp::Exp => |x| F::narrow(x.widen().exp()),
        MapOp::Ln => |x| F::narrow(x.widen().ln()),
        MapOp::Sign => sign,
        MapOp::Sqrt => |x| F::narrow(x.widen().sqrt()),
        MapOp::Asinh | MapOp::Acosh | MapOp::Atanh => return None,
    };
    Some(f)
}

fn real_with_scalar<F: Widen>(op: MapValOp) -> Option<fn(F, F) -> F> {
    let f: fn(F, F) -> F = match op {
        MapValOp::Scale => |s, x| s * x,
        MapValOp::Divide => |s, x| s / x,
        MapValOp::AddTo => |s, x| s + x,
        MapValOp::SubtractFrom => |s, x| s - x,
        MapValOp::PowScalar => |s, x| F::narrow(s.widen().powf(x.widen())),
        MapValOp::PowElement => |s, x| F::narrow(x.widen().powf(s.widen())),
    };
    Some(f)
}

fn real_binary<F: Widen>(op: ZipOp) -> Option<fn(F, F) -> F> {
    let f: fn(F, F) -> F = match op {
        ZipOp::Add => |a, b| a + b,
        ZipOp::Sub => |a, b| a - b,
        ZipOp::Mul => |a, b| a * b,
        ZipOp::Div => |a, b| a / b,
        ZipOp::Pow => |a, b| F::narrow(a.widen().powf(b.widen())),
        ZipOp::Atan2 => |a, b| F::narrow(a.widen().atan2(b.widen())),
    };
    Some(f)
}

fn real_extractor<F: Float>(op: ScalarOp) -> Option<fn(&[F]) -> F> {
    let f: fn(&[F]) -> F = match op {
        ScalarOp::Norm2 => |x| nrm2(x.len(), x, 1),
        ScalarOp::AbsSum => |x| asum(x.len(), x, 1),
        ScalarOp::MaxIndex => max_index,
        ScalarOp::Max => max_value,
        ScalarOp::MinIndex => min_index,
        ScalarOp::Min => min_value,
    };
    Some(f)
}

macro_rules! impl_real_element {
    ($t:ty, $kind:expr) => {
        impl Element for $t {
            type Real = $t;

            const KIND: ElementKind = $kind;

            #[inline(always)]
            fn zero() -> Self {
                0.0
            }

            #[inline(always)]
            fn one() -> Self {
                1.0
            }

            #[inline(always)]
            fn sum_into(acc: &mut Self, x: Self) {
                *acc += x;
            }

            #[inline(always)]
            fn product_into(acc: &mut Self, x: Self) {
                *acc *= x;
            }

            fn unary(op: MapOp) -> Option<fn(Self) -> Self> {
                real_unary(op)
            }

            fn with_scalar(op: MapValOp) -> Option<fn(Self, Self) -> Self> {
                real_with_scalar(op)
            }

            fn binary(op: ZipOp) -> Option<fn(Self, Self) -> Self> {
                real_binary(op)
            }

            fn extractor(op: ScalarOp) -> Option<fn(&[Self]) -> Self::Real> {
                real_extractor(op)
            }
        }
    };
}

impl_real_element!(f32, ElementKind::F32);
impl_real_element!(f64, ElementKind::F64);

// Magnitude and phase are evaluated in double precision for both complex
// kinds and rounded back to the element precision.
macro_rules! impl_complex_element {
    ($t:ty, $kind:expr) => {
        impl Element for Complex<$t> {
            type Real = $t;

            const KIND: ElementKind = $kind;

            #[inline(always)]
            fn zero() -> Self {
                Complex::new(0.0, 0.0)
            }

            #[inline(always)]
            fn one() -> Self {
                Complex::new(1.0, 0.0)
            }

            #[inline(always)]
            fn sum_into(acc: &mut Self, x: Self) {
                acc.re += x.re;
                acc.im += x.im;
            }

            #[inline(always)]
            fn product_into(acc: &mut Self, x: Self) {
                // The imaginary update needs the old real part.
                let temp = acc.re * x.re - acc.im * x.im;
                acc.im = acc.re * x.im + acc.im * x.re;
                acc.re = temp;
            }

            fn unary(op: MapOp) -> Option<fn(Self) -> Self> {
                let f: fn(Self) -> Self = match op {
                    MapOp::Abs => |z| {
                        let (re, im) = (z.re as f64, z.im as f64);
                        Complex::new((re * re + im * im).sqrt() as $t, 0.0)
                    },
                    MapOp::Sign => |z| {
                        if z.re == 0.0 && z.im == 0.0 {
                            return Complex::new(0.0, 0.0);
                        }
                        let (re, im) = (z.re as f64, z.im as f64);
                        let mag = (re * re + im * im).sqrt();
                        Complex::new((re / mag) as $t, (im / mag) as $t)
                    },
                    _ => return None,
                };
                Some(f)
            }

            fn with_scalar(op: MapValOp) -> Option<fn(Self, Self) -> Self> {
                let f: fn(Self, Self) -> Self = match op {
                    MapValOp::AddTo => |s, x| Complex::new(s.re + x.re, s.im + x.im),
                    _ => return None,
                };
                Some(f)
            }

            fn binary(op: ZipOp) -> Option<fn(Self, Self) -> Self> {
                let f: fn(Self, Self) -> Self = match op {
                    ZipOp::Add => |a, b| Complex::new(a.re + b.re, a.im + b.im),
                    _ => return None,
                };
                Some(f)
            }

            fn extractor(op: ScalarOp) -> Option<fn(&[Self]) -> Self::Real> {
                let f: fn(&[Self]) -> $t = match op {
                    ScalarOp::Norm2 => |x| cnrm2(x.len(), x, 1),
                    ScalarOp::AbsSum => |x| casum(x.len(), x, 1),
                    _ => return None,
                };
                Some(f)
            }
        }
    };
}

impl_complex_element!(f32, ElementKind::C32);
impl_complex_element!(f64, ElementKind::C64);
