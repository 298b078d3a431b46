//! Linkmat - Four-Directionally Linked Matrix Container
//!
//! A dense M x N grid of nodes, each holding a value and its coordinates,
//! linked to its four grid-adjacent neighbors. Rows and columns are
//! doubly linked sequences; the node at (0, 0) is the traversal origin.
//!
//! ## Architecture
//!
//! Linkmat follows a clean definition/implementation separation:
//!
//! - **linkmat-core**: Node model, container, traits, and validation
//!   (`no_std` + `alloc`, no I/O)
//! - **linkmat**: Rendering to writers and the triple loader boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use linkmat::{GridMatrix, LinkedMatrix};
//!
//! fn example() -> linkmat::Result<()> {
//!     let mut matrix: LinkedMatrix<i32> = LinkedMatrix::new(3, 3)?;
//!
//!     matrix.insert(1, 1, 99)?;
//!     let node = matrix.get_by_coordinate(1, 1)?;
//!     assert_eq!(node.value(), &99);
//!
//!     // O(1) access through the grid trait
//!     assert_eq!(matrix.get(0, 2), Some(2));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Dropping a matrix releases the whole node arena exactly once; the
//! links are arena indices, never owning references. The container does
//! no internal locking, so shared use across threads must be serialized
//! by the caller.

// Re-export core definitions
pub use linkmat_core::{
    // Container and node model
    LinkedMatrix, Neighbors, Node, NodeId, RowMajor, Triple,
    // Abstraction traits
    GridElement, GridMatrix, GridOperations,
    // Error handling
    MatrixError, Result,
    // Validation utilities
    checked_node_count, validate_dimensions, validate_position,
};

// Implementation modules
pub mod loader;
pub mod render;

// Public exports
pub use loader::from_triples;
pub use render::{print_matrix, write_matrix, write_neighbors, write_node};
