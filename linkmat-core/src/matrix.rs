//! The four-directionally linked matrix container
//!
//! A dense R x C grid of nodes where every node knows its four
//! grid-adjacent neighbors and rows and columns form doubly linked
//! sequences. All nodes live in one contiguous arena owned by the matrix
//! and are created together at construction; the links are arena indices,
//! so the whole grid is released exactly once when the matrix is dropped,
//! including a grid whose construction failed midway.
//!
//! Coordinate lookup deliberately walks the links from the origin
//! (O(row + col)); the container keeps no auxiliary index beyond the
//! arena itself. The O(1) direct path is available through
//! [`GridMatrix::get`].

use alloc::vec::Vec;

use crate::node::{Neighbors, Node, NodeId};
use crate::traits::{GridElement, GridMatrix, GridOperations};
use crate::validation;
use crate::{MatrixError, Result};

/// Dense 2D grid of four-directionally linked nodes
///
/// Dimensions are fixed at construction. The node at (0, 0) is the
/// origin, the entry point for link traversal. Values may be overwritten
/// in place via [`LinkedMatrix::insert`]; nodes are never added or
/// removed individually.
///
/// The container performs no internal synchronization; concurrent access
/// must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct LinkedMatrix<T> {
    nodes: Vec<Node<T>>,
    rows: usize,
    cols: usize,
}

impl<T: GridElement> LinkedMatrix<T> {
    /// Construct an R x C matrix with the default coordinate fill
    ///
    /// Every cell starts as `row + col` (see
    /// [`GridElement::coordinate_fill`]). Fails with `InvalidDimensions`
    /// before allocating anything when either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::with_fill(rows, cols, T::coordinate_fill)
    }

    /// Row-major scan for the first node holding `value`
    ///
    /// Walks the rows via `down` and each row via `right`, so the match
    /// with the lowest row, then the lowest column, wins. Later
    /// duplicates are unreachable through this operation. `None` is the
    /// not-found result, not an error.
    pub fn get_by_value(&self, value: T) -> Option<&Node<T>> {
        let mut row_head = Some(self.origin());

        while let Some(head) = row_head {
            let mut cell = head;
            loop {
                if cell.value == value {
                    return Some(cell);
                }
                match cell.right {
                    Some(id) => cell = self.follow(id),
                    None => break,
                }
            }
            row_head = head.down.map(|id| self.follow(id));
        }

        None
    }
}

impl<T> LinkedMatrix<T> {
    /// Construct an R x C matrix with a caller-supplied fill
    ///
    /// The fill closure is called once per cell in row-major order.
    /// Allocation is attempted up front; on failure nothing is leaked and
    /// `AllocationFailed` is returned.
    pub fn with_fill<F>(rows: usize, cols: usize, mut fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let count = validation::checked_node_count(rows, cols)?;

        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(count)
            .map_err(|_| MatrixError::AllocationFailed)?;

        for row in 0..rows {
            for col in 0..cols {
                let index = row * cols + col;
                nodes.push(Node {
                    value: fill(row, col),
                    row,
                    col,
                    up: if row > 0 { Some(NodeId(index - cols)) } else { None },
                    down: if row + 1 < rows {
                        Some(NodeId(index + cols))
                    } else {
                        None
                    },
                    left: if col > 0 { Some(NodeId(index - 1)) } else { None },
                    right: if col + 1 < cols {
                        Some(NodeId(index + 1))
                    } else {
                        None
                    },
                });
            }
        }

        Ok(Self { nodes, rows, cols })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The node at (0, 0)
    pub fn origin(&self) -> &Node<T> {
        &self.nodes[0]
    }

    /// Resolve an arena identifier, `None` if it is not from this arena
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    /// Resolve a link target. Link identifiers are always in range.
    fn follow(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    /// Look up the node at (row, col) by walking the links
    ///
    /// Starts at the origin, follows `down` `row` times, then `right`
    /// `col` times. Running off the grid on either axis reports
    /// `IndexOutOfBounds`.
    pub fn get_by_coordinate(&self, row: usize, col: usize) -> Result<&Node<T>> {
        let mut node = self.origin();

        for _ in 0..row {
            node = match node.down {
                Some(id) => self.follow(id),
                None => return Err(MatrixError::IndexOutOfBounds),
            };
        }

        for _ in 0..col {
            node = match node.right {
                Some(id) => self.follow(id),
                None => return Err(MatrixError::IndexOutOfBounds),
            };
        }

        Ok(node)
    }

    /// Overwrite the value at (row, col)
    pub fn insert(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        validation::validate_position(self.rows, self.cols, row, col)?;
        self.nodes[row * self.cols + col].value = value;
        Ok(())
    }

    /// The four grid-adjacent nodes of (row, col)
    ///
    /// Boundary sides come back absent.
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Neighbors<'_, T>> {
        validation::validate_position(self.rows, self.cols, row, col)?;
        let node = &self.nodes[row * self.cols + col];

        Ok(Neighbors {
            up: node.up.map(|id| self.follow(id)),
            down: node.down.map(|id| self.follow(id)),
            left: node.left.map(|id| self.follow(id)),
            right: node.right.map(|id| self.follow(id)),
        })
    }

    /// Iterate over all nodes in row-major order, following the links
    pub fn iter(&self) -> RowMajor<'_, T> {
        RowMajor {
            matrix: self,
            row_head: Some(NodeId(0)),
            cursor: Some(NodeId(0)),
            remaining: self.nodes.len(),
        }
    }

    /// Iterate over all values in row-major order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|node| &node.value)
    }
}

/// Row-major link-walking iterator over the nodes of a matrix
///
/// Visits all columns of row 0 via `right`, then drops to the next row
/// through the row head's `down` link.
pub struct RowMajor<'a, T> {
    matrix: &'a LinkedMatrix<T>,
    row_head: Option<NodeId>,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for RowMajor<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.matrix.follow(id);

        self.cursor = match node.right {
            Some(right) => Some(right),
            None => {
                self.row_head = self
                    .row_head
                    .and_then(|head| self.matrix.follow(head).down);
                self.row_head
            }
        };

        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RowMajor<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedMatrix<T> {
    type Item = &'a Node<T>;
    type IntoIter = RowMajor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: GridElement> GridMatrix for LinkedMatrix<T> {
    type Element = T;

    fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.nodes[row * self.cols + col].value)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<T: GridElement> GridOperations for LinkedMatrix<T> {
    fn row_values(&self, row: usize) -> Vec<T> {
        let Ok(first) = self.get_by_coordinate(row, 0) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(self.cols);
        let mut node = first;
        loop {
            out.push(node.value);
            match node.right {
                Some(id) => node = self.follow(id),
                None => break,
            }
        }
        out
    }

    fn col_values(&self, col: usize) -> Vec<T> {
        let Ok(first) = self.get_by_coordinate(0, col) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(self.rows);
        let mut node = first;
        loop {
            out.push(node.value);
            match node.down {
                Some(id) => node = self.follow(id),
                None => break,
            }
        }
        out
    }
}

impl<T> core::fmt::Display for LinkedMatrix<T>
where
    T: core::fmt::Display,
{
    /// Row-major rendering, one line per row: ` -- [v (r,c)] -- ... --`
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut row_head = Some(self.origin());

        while let Some(head) = row_head {
            let mut cell = Some(head);
            while let Some(node) = cell {
                write!(f, " -- {node}")?;
                cell = node.right.map(|id| self.follow(id));
            }
            writeln!(f, " --")?;

            row_head = head.down.map(|id| self.follow(id));
        }

        Ok(())
    }
}
