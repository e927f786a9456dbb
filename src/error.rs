//! Error types for the clustering and loci-algebra core.

use thiserror::Error;

/// Errors surfaced by the clustering and loci algebra core.
///
/// All variants represent [`InvariantViolation`](https://en.wikipedia.org/wiki/Invariant_(computer_science))
/// conditions per the error design: bad input is always the caller's fault,
/// and is always reported immediately rather than worked around.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// The input array was not sorted in ascending order.
    #[error("array is not sorted ascending at index {index} ({prev} > {next})")]
    Unsorted { index: usize, prev: i64, next: i64 },

    /// `min_points` (`k`) must be at least 2 to form a subcluster.
    #[error("min_points must be >= 2, got {0}")]
    MinPointsTooSmall(usize),

    /// A slice's bounds fell outside the array it was taken from.
    #[error("slice [{lower}, {upper}) is out of bounds for array of length {len}")]
    SliceOutOfBounds {
        lower: usize,
        upper: usize,
        len: usize,
    },

    /// An unrecognised hierarchical clustering method string.
    #[error("unrecognised clustering method {0:?}, expected \"conservative\" or \"aggressive\"")]
    UnknownMethod(String),
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, ClusterError>;
