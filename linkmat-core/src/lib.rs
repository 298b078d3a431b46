#![no_std]

//! Linkmat Core - Linked Matrix Container Definitions
//!
//! This crate provides the node model, error types, abstraction traits
//! and validation routines for a dense 2D matrix whose cells are linked
//! to their four grid neighbors. The container itself lives behind the
//! `alloc` feature; everything else is allocation-free.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod matrix;
pub mod node;
pub mod traits;
pub mod triple;
pub mod validation;

pub use error::*;
#[cfg(feature = "alloc")]
pub use matrix::*;
pub use node::*;
pub use traits::*;
pub use triple::*;
pub use validation::*;
