//! Error types for sequence alignment.

/// Errors from undoing a peak rotation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    /// Returned when the rotated series is empty.
    #[error("rotated series must be non-empty")]
    EmptySeries,

    /// Returned when the peak index is the reserved [`INVALID_INDEX`](crate::INVALID_INDEX).
    #[error("peak index is the invalid sentinel")]
    InvalidIndex,

    /// Returned when the peak index does not address an element of the series.
    #[error("peak index {index} out of range for series of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the rotated series.
        len: usize,
    },
}
