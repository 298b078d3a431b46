//! Core grid abstraction traits
//!
//! This module defines the fundamental traits that grid containers must
//! satisfy. These are pure interfaces with no concrete implementations.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::GridElement;

/// Core dense grid trait for storage-agnostic access
///
/// Provides the minimal interface for reading a dense 2D grid regardless
/// of how the cells are stored or linked.
pub trait GridMatrix {
    /// The element type stored in this grid
    type Element: GridElement;

    /// Get the value at the specified position
    ///
    /// Returns `None` if the position is out of bounds. This is the O(1)
    /// access path; containers that also support link traversal expose it
    /// separately.
    fn get(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Grid dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Total number of cells
    fn node_count(&self) -> usize;
}

/// Extension trait for row/column extraction (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait GridOperations: GridMatrix {
    /// All values of a row, in column order
    ///
    /// Returns an empty vector for an out-of-bounds row.
    fn row_values(&self, row: usize) -> Vec<Self::Element>;

    /// All values of a column, in row order
    ///
    /// Returns an empty vector for an out-of-bounds column.
    fn col_values(&self, col: usize) -> Vec<Self::Element>;
}
