//! Error types for matrix primitives and transform kernels.

/// Errors from matrix construction and multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Returned when a matrix would have zero rows or zero-length rows.
    #[error("matrix must have at least one row and one column")]
    Empty,

    /// Returned when the rows passed to a constructor differ in length.
    #[error("ragged matrix: row {row} has {got} columns, expected {expected}")]
    Ragged {
        /// Zero-based index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// Returned when the left operand's column count differs from the right
    /// operand's row count.
    #[error("cannot multiply: left operand has {left_cols} columns, right operand has {right_rows} rows")]
    DimensionMismatch {
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
    },
}

/// Errors from DCT kernels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DctError {
    /// Returned when the caller's [`CancellationToken`](crate::CancellationToken)
    /// was signalled before the transform completed.
    #[error("transform cancelled")]
    Cancelled,

    /// Wraps a matrix error raised while applying the basis matrix.
    #[error("matrix error during transform: {0}")]
    Matrix(#[from] MatrixError),
}
