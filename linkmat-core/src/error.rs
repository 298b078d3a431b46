//! Error types for linked matrix operations

/// Errors that can occur while constructing or querying a linked matrix
///
/// Only `AllocationFailed` is fatal for the container; everything else is
/// recoverable and returned to the caller. A failed value search is not an
/// error at all and is reported as `None` by the search operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A dimension is zero or negative; reported before any allocation
    InvalidDimensions,
    /// Row or column coordinate outside the grid
    IndexOutOfBounds,
    /// rows * cols does not fit in usize
    SizeOverflow,
    /// The node arena could not be allocated
    AllocationFailed,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::InvalidDimensions => "Matrix dimensions must each be at least 1",
            MatrixError::IndexOutOfBounds => "Coordinate out of bounds",
            MatrixError::SizeOverflow => "Node count overflows usize",
            MatrixError::AllocationFailed => "Could not allocate the node arena",
        };
        write!(f, "{msg}")
    }
}

/// Result type for linked matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
