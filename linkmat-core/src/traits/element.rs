//! Element type constraints for grid containers
//!
//! This module defines the trait that constrains what types can be stored
//! as cell values. All element types must be:
//! - Copy: Can be copied without allocation
//! - PartialEq: Can be compared for equality (value search relies on it)
//! - Sized: Have a known size at compile time

/// Trait for types that can be stored as matrix cell values
pub trait GridElement: Copy + Clone + PartialEq + Sized {
    /// Convert from an unsigned index for generic construction
    fn from_usize(value: usize) -> Self;

    /// Default cell content derived from the cell's coordinates
    ///
    /// A freshly constructed matrix fills each cell with `row + col`
    /// unless the caller supplies its own fill.
    fn coordinate_fill(row: usize, col: usize) -> Self {
        Self::from_usize(row + col)
    }
}

// Implement GridElement for standard numeric types

impl GridElement for i32 {
    fn from_usize(value: usize) -> Self {
        value as i32
    }
}

impl GridElement for i64 {
    fn from_usize(value: usize) -> Self {
        value as i64
    }
}

impl GridElement for u32 {
    fn from_usize(value: usize) -> Self {
        value as u32
    }
}

impl GridElement for u64 {
    fn from_usize(value: usize) -> Self {
        value as u64
    }
}

impl GridElement for f32 {
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl GridElement for f64 {
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_fill() {
        assert_eq!(<i32 as GridElement>::coordinate_fill(1, 1), 2);
        assert_eq!(<u64 as GridElement>::coordinate_fill(0, 0), 0);
        assert_eq!(<i64 as GridElement>::coordinate_fill(4, 7), 11);
        assert_eq!(<f64 as GridElement>::coordinate_fill(2, 3), 5.0);
    }
}
