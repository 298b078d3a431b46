//! Dimension and coordinate validation
//!
//! Pure mathematical validation for grid geometry with overflow
//! protection. Dimension input from untrusted producers arrives signed,
//! so negative values are rejected here rather than silently wrapped.

use crate::{MatrixError, Result};

/// Validate signed dimensions from an untrusted producer
///
/// Rows and columns must each be at least 1. Returns the dimensions as
/// unsigned values ready for construction. Nothing is allocated before
/// this check runs.
pub const fn validate_dimensions(rows: i64, cols: i64) -> Result<(usize, usize)> {
    if rows < 1 || cols < 1 {
        return Err(MatrixError::InvalidDimensions);
    }

    Ok((rows as usize, cols as usize))
}

/// Calculate the node count for a grid with overflow protection
///
/// Rejects zero dimensions and any grid whose node count would not fit
/// in usize.
pub const fn checked_node_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidDimensions);
    }

    match rows.checked_mul(cols) {
        Some(count) => Ok(count),
        None => Err(MatrixError::SizeOverflow),
    }
}

/// Validate that a coordinate lies inside an R x C grid
pub const fn validate_position(rows: usize, cols: usize, row: usize, col: usize) -> Result<()> {
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfBounds);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dimensions() {
        assert_eq!(validate_dimensions(1, 1), Ok((1, 1)));
        assert_eq!(validate_dimensions(3, 7), Ok((3, 7)));

        assert_eq!(validate_dimensions(0, 5), Err(MatrixError::InvalidDimensions));
        assert_eq!(validate_dimensions(5, 0), Err(MatrixError::InvalidDimensions));
        assert_eq!(validate_dimensions(-1, 5), Err(MatrixError::InvalidDimensions));
        assert_eq!(validate_dimensions(5, -3), Err(MatrixError::InvalidDimensions));
        assert_eq!(validate_dimensions(-2, -2), Err(MatrixError::InvalidDimensions));
    }

    #[test]
    fn test_checked_node_count() {
        assert_eq!(checked_node_count(3, 3), Ok(9));
        assert_eq!(checked_node_count(1, 1000), Ok(1000));

        assert_eq!(checked_node_count(0, 3), Err(MatrixError::InvalidDimensions));
        assert_eq!(checked_node_count(3, 0), Err(MatrixError::InvalidDimensions));
        assert_eq!(
            checked_node_count(usize::MAX, 2),
            Err(MatrixError::SizeOverflow)
        );
    }

    #[test]
    fn test_validate_position() {
        assert_eq!(validate_position(3, 3, 0, 0), Ok(()));
        assert_eq!(validate_position(3, 3, 2, 2), Ok(()));

        assert_eq!(validate_position(3, 3, 3, 0), Err(MatrixError::IndexOutOfBounds));
        assert_eq!(validate_position(3, 3, 0, 3), Err(MatrixError::IndexOutOfBounds));
        assert_eq!(
            validate_position(3, 3, usize::MAX, 0),
            Err(MatrixError::IndexOutOfBounds)
        );
    }
}
