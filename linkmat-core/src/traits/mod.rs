//! Abstraction traits for grid containers
//!
//! These are pure interfaces; the concrete linked matrix implements them
//! in `matrix`.

pub mod element;
pub mod matrix;

pub use element::GridElement;
pub use matrix::GridMatrix;

#[cfg(feature = "alloc")]
pub use matrix::GridOperations;
