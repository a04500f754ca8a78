//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the MLS core: moment-matrix assembly and
//! shape-function computation (via `ShapeContext`). Every query builds a
//! fresh weighted moment matrix from the current point snapshot, solves it,
//! and collapses the result into one scalar shape value per point.

/// Moment-matrix assembly and shape-function computation.
pub mod shape;
