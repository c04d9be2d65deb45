//! Error types and status codes for vecaux kernels.
//!
//! Every kernel validates its arguments before touching the output buffer and
//! reports failure as a [`VecauxError`]. The C entry points flatten these
//! errors into the integer status codes shared with the host array library.

use std::os::raw::c_int;

/// Success.
pub const OK: c_int = 0;
/// A length invariant was violated.
pub const BAD_SIZE: c_int = 2000;
/// The opcode is not recognized for the requested kind and family.
pub const BAD_CODE: c_int = 2001;
/// Out of memory. Reserved, never produced by the kernels.
pub const MEM: c_int = 2002;
/// Bad file. Reserved, never produced by the kernels.
pub const BAD_FILE: c_int = 2003;

/// Errors that can occur when running a kernel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VecauxError {
    /// Input and output lengths do not satisfy the kernel's contract.
    #[error("size mismatch in {kernel}: {message}")]
    SizeMismatch {
        /// Name of the kernel that rejected the call.
        kernel: &'static str,
        /// Human-readable description of the violated constraint.
        message: String,
    },

    /// The opcode does not name an operation available for this kind.
    #[error("bad opcode {code} for {kernel} on {kind}")]
    BadCode {
        /// Name of the kernel that rejected the call.
        kernel: &'static str,
        /// The rejected opcode.
        code: c_int,
        /// Element kind the kernel was invoked on.
        kind: &'static str,
    },

    #[error("out of memory")]
    Memory,

    #[error("bad file")]
    BadFile,
}

impl VecauxError {
    /// Integer status code for this error.
    pub fn status(&self) -> c_int {
        match self {
            VecauxError::SizeMismatch { .. } => BAD_SIZE,
            VecauxError::BadCode { .. } => BAD_CODE,
            VecauxError::Memory => MEM,
            VecauxError::BadFile => BAD_FILE,
        }
    }
}

/// Result type alias for vecaux operations.
pub type Result<T> = std::result::Result<T, VecauxError>;

/// Flattens a kernel result into a status code, `0` on success.
pub fn status_of(result: &Result<()>) -> c_int {
    match result {
        Ok(()) => OK,
        Err(e) => e.status(),
    }
}

/// Creates a size mismatch error.
pub fn size_mismatch(kernel: &'static str, message: impl Into<String>) -> VecauxError {
    VecauxError::SizeMismatch {
        kernel,
        message: message.into(),
    }
}

/// Creates a bad opcode error.
pub fn bad_code(kernel: &'static str, code: c_int, kind: &'static str) -> VecauxError {
    VecauxError::BadCode { kernel, code, kind }
}

/// Fails unless the output of a scalar-producing kernel has length 1.
pub(crate) fn require_scalar_output(kernel: &'static str, rn: usize) -> Result<()> {
    if rn != 1 {
        return Err(size_mismatch(
            kernel,
            format!("output length must be 1, got {rn}"),
        ));
    }
    Ok(())
}

/// Fails unless every length in `lens` equals the first one.
pub(crate) fn require_same_len(kernel: &'static str, lens: &[usize]) -> Result<()> {
    if let Some((&first, rest)) = lens.split_first() {
        if rest.iter().any(|&n| n != first) {
            return Err(size_mismatch(
                kernel,
                format!("vector lengths must match, got {lens:?}"),
            ));
        }
    }
    Ok(())
}
