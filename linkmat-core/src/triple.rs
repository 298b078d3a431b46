//! The (row, column, value) boundary record
//!
//! Producers of matrix content (a file loader, a command layer) hand the
//! container plain coordinate/value triples. This is the whole boundary
//! contract; no file layout is defined here.

/// One cell assignment supplied by an external producer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple<T> {
    /// Row coordinate, 0-based
    pub row: usize,
    /// Column coordinate, 0-based
    pub col: usize,
    /// Value to store at (row, col)
    pub value: T,
}

impl<T> Triple<T> {
    /// Create a triple
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}
