//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental building blocks used throughout the
//! crate:
//! - The `DataPoint` sample type and point-set construction helpers
//! - The `MlsError` error taxonomy
//!
//! These have no dependency on any other layer.

/// Error types for MLS operations.
pub mod errors;

/// 2-D sample points and point-set construction.
pub mod point;
