//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout MLS:
//! - Basis evaluators mapping an abscissa to a vector of basis terms
//! - Weight kernels for distance-based weighting
//! - The linear algebra backend for the moment-matrix solve
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Basis evaluators for the local polynomial model.
pub mod basis;

/// Kernel (weight) functions for distance-based weighting.
pub mod kernel;

/// Linear algebra backend for the moment-matrix solve.
pub mod linalg;
