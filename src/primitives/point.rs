//! 2-D sample points and point-set construction.
//!
//! ## Purpose
//!
//! This module provides the `DataPoint` sample type and helpers for building
//! a point-set snapshot from caller-supplied data.
//!
//! ## Design notes
//!
//! * **Value identity**: A `DataPoint` is an immutable `(x, y)` pair; the
//!   algorithm never mutates points, it only reads snapshots.
//! * **Order independence**: Insertion order is irrelevant to evaluation;
//!   all points are summed.
//!
//! ## Non-goals
//!
//! * This module does not own a live, mutable collection. Scene graphs or
//!   data feeds own their points and hand the evaluator a snapshot.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MlsError;

// ============================================================================
// DataPoint
// ============================================================================

/// An immutable 2-D sample: abscissa `x` and observed ordinate `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint<T> {
    /// Sample abscissa.
    pub x: T,
    /// Observed ordinate.
    pub y: T,
}

impl<T: Float> DataPoint<T> {
    /// Create a new sample.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ============================================================================
// Point-Set Construction
// ============================================================================

/// Build a point-set snapshot from parallel `x` and `y` slices.
///
/// Returns [`MlsError::MismatchedInputs`] when the slices differ in length.
pub fn points_from_slices<T: Float>(x: &[T], y: &[T]) -> Result<Vec<DataPoint<T>>, MlsError> {
    if x.len() != y.len() {
        return Err(MlsError::MismatchedInputs {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    Ok(x.iter()
        .zip(y.iter())
        .map(|(&x, &y)| DataPoint::new(x, y))
        .collect())
}

/// Build a point-set snapshot from `(x, y)` pairs.
pub fn points_from_pairs<T: Float>(pairs: &[(T, T)]) -> Vec<DataPoint<T>> {
    pairs.iter().map(|&(x, y)| DataPoint::new(x, y)).collect()
}
