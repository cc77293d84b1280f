// src/numerics/error.rs

/// Errors raised by matrix access and matrix serialization.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Index out of bounds: ({row}, {col}) is outside a 3x4 matrix")]
    IndexOutOfBounds { row: usize, col: usize },

    #[error("Invalid slice length: expected {expected} components, got {actual}")]
    SliceLength { expected: usize, actual: usize },

    #[error("Encoding failed: {0}")]
    Encode(String),

    #[error("Decoding failed: {0}")]
    Decode(String),

    #[error("Serial version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u64, found: u64 },

    #[error("Trailing bytes: {0} bytes left after the matrix payload")]
    TrailingBytes(usize),
}

pub type Result<T> = core::result::Result<T, MatrixError>;
