//! The loader boundary: building matrices from (row, col, value) triples
//!
//! An external producer (a file loader, a command layer) supplies grid
//! dimensions and a sequence of [`Triple`] records. The dimensions may
//! come from untrusted input and arrive signed; triples landing outside
//! the grid fail the whole load. No file layout is defined here, only
//! the triple contract.

use linkmat_core::{validation, GridElement, LinkedMatrix, Result, Triple};

/// Build a matrix from dimensions and a triple sequence
///
/// The grid starts with the default coordinate fill; each triple then
/// overwrites its cell, later triples winning over earlier ones. An
/// out-of-bounds triple aborts the load with `IndexOutOfBounds`.
pub fn from_triples<T, I>(rows: usize, cols: usize, triples: I) -> Result<LinkedMatrix<T>>
where
    T: GridElement,
    I: IntoIterator<Item = Triple<T>>,
{
    let mut matrix = LinkedMatrix::new(rows, cols)?;

    for triple in triples {
        matrix.insert(triple.row, triple.col, triple.value)?;
    }

    Ok(matrix)
}

/// Build a default-filled matrix from signed, untrusted dimensions
///
/// Zero or negative dimensions fail with `InvalidDimensions` before any
/// allocation happens.
pub fn from_signed_dimensions<T: GridElement>(rows: i64, cols: i64) -> Result<LinkedMatrix<T>> {
    let (rows, cols) = validation::validate_dimensions(rows, cols)?;
    LinkedMatrix::new(rows, cols)
}

/// Parse a JSON array of triples, e.g. `[{"row":0,"col":1,"value":7}]`
///
/// This demonstrates the boundary contract over serde; it does not
/// define a storage format.
#[cfg(feature = "serde")]
pub fn triples_from_json<T>(json: &str) -> serde_json::Result<Vec<Triple<T>>>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkmat_core::{GridMatrix, MatrixError};

    #[test]
    fn test_from_triples_applies_records() {
        let triples = vec![
            Triple::new(0, 0, 10),
            Triple::new(1, 2, 20),
            Triple::new(1, 2, 30), // later record wins
        ];
        let m = from_triples(2, 3, triples).unwrap();

        assert_eq!(m.get(0, 0), Some(10));
        assert_eq!(m.get(1, 2), Some(30));
        // untouched cells keep the coordinate fill
        assert_eq!(m.get(0, 1), Some(1));
    }

    #[test]
    fn test_from_triples_rejects_out_of_bounds_records() {
        let triples = vec![Triple::new(5, 0, 1)];
        assert_eq!(
            from_triples::<i32, _>(2, 2, triples).unwrap_err(),
            MatrixError::IndexOutOfBounds
        );
    }

    #[test]
    fn test_from_signed_dimensions() {
        let m = from_signed_dimensions::<i32>(2, 2).unwrap();
        assert_eq!(m.dimensions(), (2, 2));

        assert_eq!(
            from_signed_dimensions::<i32>(-1, 2).unwrap_err(),
            MatrixError::InvalidDimensions
        );
        assert_eq!(
            from_signed_dimensions::<i32>(2, 0).unwrap_err(),
            MatrixError::InvalidDimensions
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_triples_from_json_boundary() {
        let json = r#"[
            {"row": 0, "col": 1, "value": 7},
            {"row": 2, "col": 0, "value": -3}
        ]"#;

        let triples: Vec<Triple<i32>> = triples_from_json(json).unwrap();
        let m = from_triples(3, 2, triples).unwrap();

        assert_eq!(m.get(0, 1), Some(7));
        assert_eq!(m.get(2, 0), Some(-3));

        // negative coordinates never deserialize into the unsigned contract
        assert!(triples_from_json::<i32>(r#"[{"row": -1, "col": 0, "value": 1}]"#).is_err());
    }
}
