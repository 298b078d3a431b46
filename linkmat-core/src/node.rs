//! Node and arena identifier definitions
//!
//! Nodes live in a contiguous arena owned by the matrix and point at their
//! four grid neighbors through arena indices instead of raw references.
//! A boundary side simply has no link.

/// Index of a node within the matrix arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Create an identifier from a raw arena index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena index of this identifier
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One cell of the matrix
///
/// Holds the cell value, the cell's fixed grid coordinates and the links
/// to its four grid-adjacent neighbors. The links are maintained by the
/// matrix; they always satisfy the symmetry invariant (`up.down` is the
/// node itself whenever `up` exists, and analogously for the other three
/// directions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) up: Option<NodeId>,
    pub(crate) down: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// The stored cell value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Row coordinate, 0-based
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column coordinate, 0-based
    pub fn column(&self) -> usize {
        self.col
    }

    /// (row, column) position of this node
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Neighbor above, `None` on row 0
    pub fn up(&self) -> Option<NodeId> {
        self.up
    }

    /// Neighbor below, `None` on the last row
    pub fn down(&self) -> Option<NodeId> {
        self.down
    }

    /// Neighbor to the left, `None` on column 0
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Neighbor to the right, `None` on the last column
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }
}

/// The four grid-adjacent nodes of a cell
///
/// Borrowed view produced by [`crate::LinkedMatrix::neighbors`]. Absent
/// sides mean the cell sits on that grid boundary.
#[derive(Debug)]
pub struct Neighbors<'a, T> {
    pub up: Option<&'a Node<T>>,
    pub down: Option<&'a Node<T>>,
    pub left: Option<&'a Node<T>>,
    pub right: Option<&'a Node<T>>,
}

impl<T> core::fmt::Display for Node<T>
where
    T: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{} ({},{})]", self.value, self.row, self.col)
    }
}
