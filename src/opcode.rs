//! Opcode catalogues for each kernel family.
//!
//! Opcodes are the small integers the host library passes across the C
//! boundary. Each family decodes them into an enum; whether an operation is
//! actually available depends on the element kind and is decided by
//! [`Element`](crate::element::Element).

use std::os::raw::c_int;

/// Unary element-wise transforms selected by [`map`](crate::kernels::map::map).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapOp {
    Sin,
    Cos,
    Tan,
    Abs,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    /// Reserved, no kind implements it.
    Asinh,
    /// Reserved, no kind implements it.
    Acosh,
    /// Reserved, no kind implements it.
    Atanh,
    Exp,
    Ln,
    Sign,
    Sqrt,
}

impl MapOp {
    pub fn from_code(code: c_int) -> Option<Self> {
        let op = match code {
            0 => MapOp::Sin,
            1 => MapOp::Cos,
            2 => MapOp::Tan,
            3 => MapOp::Abs,
            4 => MapOp::Asin,
            5 => MapOp::Acos,
            6 => MapOp::Atan,
            7 => MapOp::Sinh,
            8 => MapOp::Cosh,
            9 => MapOp::Tanh,
            10 => MapOp::Asinh,
            11 => MapOp::Acosh,
            12 => MapOp::Atanh,
            13 => MapOp::Exp,
            14 => MapOp::Ln,
            15 => MapOp::Sign,
            16 => MapOp::Sqrt,
            _ => return None,
        };
        Some(op)
    }

    pub fn code(self) -> c_int {
        self as c_int
    }
}

/// Transforms of a vector against one broadcast scalar `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapValOp {
    /// `s * x`
    Scale,
    /// `s / x`
    Divide,
    /// `s + x`
    AddTo,
    /// `s - x`
    SubtractFrom,
    /// `s ^ x`
    PowScalar,
    /// `x ^ s`
    PowElement,
}

impl MapValOp {
    pub fn from_code(code: c_int) -> Option<Self> {
        let op = match code {
            0 => MapValOp::Scale,
            1 => MapValOp::Divide,
            2 => MapValOp::AddTo,
            3 => MapValOp::SubtractFrom,
            4 => MapValOp::PowScalar,
            5 => MapValOp::PowElement,
            _ => return None,
        };
        Some(op)
    }

    pub fn code(self) -> c_int {
        self as c_int
    }
}

/// Element-wise binary combinations of two vectors `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZipOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `a ^ b`
    Pow,
    /// `atan2(a, b)`
    Atan2,
}

impl ZipOp {
    pub fn from_code(code: c_int) -> Option<Self> {
        let op = match code {
            0 => ZipOp::Add,
            1 => ZipOp::Sub,
            2 => ZipOp::Mul,
            3 => ZipOp::Div,
            4 => ZipOp::Pow,
            5 => ZipOp::Atan2,
            _ => return None,
        };
        Some(op)
    }

    pub fn code(self) -> c_int {
        self as c_int
    }
}

/// Single-value statistics extracted by
/// [`to_scalar`](crate::kernels::scalar::to_scalar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarOp {
    /// Euclidean norm.
    Norm2,
    /// Sum of absolute values.
    AbsSum,
    MaxIndex,
    Max,
    MinIndex,
    Min,
}

impl ScalarOp {
    pub fn from_code(code: c_int) -> Option<Self> {
        let op = match code {
            0 => ScalarOp::Norm2,
            1 => ScalarOp::AbsSum,
            2 => ScalarOp::MaxIndex,
            3 => ScalarOp::Max,
            4 => ScalarOp::MinIndex,
            5 => ScalarOp::Min,
            _ => return None,
        };
        Some(op)
    }

    pub fn code(self) -> c_int {
        self as c_int
    }

    /// Extremum values are seeded with element 0. The index scans report 0
    /// for an empty vector instead.
    pub fn reads_first_element(self) -> bool {
        matches!(self, ScalarOp::Max | ScalarOp::Min)
    }
}
