//! Error type shared by every matrix operation.

use crate::matrix::Shape;

/// Error type for matrix construction and multiplication.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Operands have incompatible shapes for the named operation.
    #[error("shape mismatch in {op}: {left} vs {right}")]
    Shape {
        op: &'static str,
        left: Shape,
        right: Shape,
    },

    /// The operation requires a square matrix.
    #[error("matrix is not square: {0}")]
    NotSquare(Shape),

    /// Strassen recursion requires a power-of-two dimension.
    #[error("dimension {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Quadrant split of a matrix whose dimension is not even.
    #[error("cannot split a {0}x{0} matrix into quadrants")]
    Indivisible(usize),

    /// Backing data does not match the declared shape.
    #[error("data length {len} does not match a {shape} matrix")]
    DataLength { len: usize, shape: Shape },

    /// Row-wise construction with rows of differing length.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Element access outside the matrix.
    #[error("index ({row}, {col}) out of bounds for a {shape} matrix")]
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },

    /// The element count of the requested shape does not fit in `usize`.
    #[error("a {0} matrix has more elements than fit in memory")]
    SizeOverflow(Shape),

    /// The allocator refused a (sub-)matrix buffer.
    #[error("failed to allocate {elements} matrix elements")]
    Allocation { elements: usize },

    /// Computation was cancelled.
    #[error("computation cancelled")]
    Cancelled,

    /// Computation hit its deadline.
    #[error("computation timed out after {0}")]
    Timeout(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// Results from different multipliers don't match.
    #[error("result mismatch between {left} and {right} (max delta {max_delta:e})")]
    Mismatch {
        left: String,
        right: String,
        max_delta: f64,
    },
}

impl MatrixError {
    /// Whether this error is a caller contract violation on operand shapes.
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::Shape { .. }
                | Self::NotSquare(_)
                | Self::NotPowerOfTwo(_)
                | Self::Indivisible(_)
                | Self::DataLength { .. }
                | Self::RaggedRows { .. }
        )
    }
}
