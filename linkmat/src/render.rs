//! Diagnostic rendering of matrices, nodes and neighborhoods
//!
//! Pure output, no state mutation. Every function writes to a caller
//! supplied [`std::io::Write`] and reports failure only through the
//! writer's own error.

use std::fmt::Display;
use std::io::{self, Write};

use linkmat_core::{LinkedMatrix, Neighbors, Node};

/// Write the whole grid row-major, one line per row
///
/// Each cell renders as ` -- [value (row,col)]` with a trailing ` --`
/// at the end of the line, so a 2x2 default-filled matrix looks like:
///
/// ```text
///  -- [0 (0,0)] -- [1 (0,1)] --
///  -- [1 (1,0)] -- [2 (1,1)] --
/// ```
pub fn write_matrix<T, W>(matrix: &LinkedMatrix<T>, out: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    write!(out, "{matrix}")
}

/// Write the grid to stdout
pub fn print_matrix<T: Display>(matrix: &LinkedMatrix<T>) -> io::Result<()> {
    let stdout = io::stdout();
    write_matrix(matrix, &mut stdout.lock())
}

/// Write a single node as `[value (row,col)]`
pub fn write_node<T, W>(node: &Node<T>, out: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    writeln!(out, "{node}")
}

/// Write the four-direction neighborhood of a cell
///
/// Absent sides (grid boundaries) render as `(none)`:
///
/// ```text
/// up    -> [1 (0,1)]
/// down  -> [3 (2,1)]
/// left  -> [1 (1,0)]
/// right -> [3 (1,2)]
/// ```
pub fn write_neighbors<T, W>(neighbors: &Neighbors<'_, T>, out: &mut W) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    write_side(out, "up", neighbors.up)?;
    write_side(out, "down", neighbors.down)?;
    write_side(out, "left", neighbors.left)?;
    write_side(out, "right", neighbors.right)
}

fn write_side<T, W>(out: &mut W, label: &str, side: Option<&Node<T>>) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    match side {
        Some(node) => writeln!(out, "{label:<5} -> {node}"),
        None => writeln!(out, "{label:<5} -> (none)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_matrix_layout() {
        let m: LinkedMatrix<i32> = LinkedMatrix::new(2, 2).unwrap();
        let mut buf = Vec::new();
        write_matrix(&m, &mut buf).unwrap();

        let rendered = String::from_utf8(buf).unwrap();
        assert_eq!(
            rendered,
            " -- [0 (0,0)] -- [1 (0,1)] --\n -- [1 (1,0)] -- [2 (1,1)] --\n"
        );
    }

    #[test]
    fn test_write_node() {
        let m: LinkedMatrix<i32> = LinkedMatrix::new(2, 3).unwrap();
        let node = m.get_by_coordinate(1, 2).unwrap();

        let mut buf = Vec::new();
        write_node(node, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[3 (1,2)]\n");
    }

    #[test]
    fn test_write_neighbors_marks_boundaries() {
        let m: LinkedMatrix<i32> = LinkedMatrix::new(3, 3).unwrap();
        let corner = m.neighbors(0, 0).unwrap();

        let mut buf = Vec::new();
        write_neighbors(&corner, &mut buf).unwrap();
        let rendered = String::from_utf8(buf).unwrap();

        assert!(rendered.contains("up    -> (none)"));
        assert!(rendered.contains("left  -> (none)"));
        assert!(rendered.contains("down  -> [1 (1,0)]"));
        assert!(rendered.contains("right -> [1 (0,1)]"));
    }
}
