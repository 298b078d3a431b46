//! Validation utilities for matrix dimensions and coordinates
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions are mathematical checks on grid geometry.

pub mod dims;

pub use dims::{checked_node_count, validate_dimensions, validate_position};
