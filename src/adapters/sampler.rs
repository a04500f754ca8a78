//! Fixed-step curve sampling across the data's x-range.
//!
//! ## Purpose
//!
//! This module provides [`CurveSampler`], which spans the current point
//! snapshot's x-range at a fixed step, evaluates the approximation at each
//! abscissa, and collects the resulting `(x, y)` polyline — the shape a
//! renderer draws every frame.
//!
//! ## Design notes
//!
//! * **Grid**: `ceil(range / step) + 1` abscissas starting at the minimum
//!   x. When the range is not an exact multiple of the step, the final
//!   abscissa overshoots the data maximum by less than one step.
//! * **Skip on failure**: An abscissa without sufficient support produces no
//!   polyline vertex instead of failing the whole pass.
//!
//! ## Non-goals
//!
//! * This module does not render; it produces vertices for a consumer to
//!   draw.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::MlsEvaluator;
use crate::engine::validator::Validator;
use crate::math::basis::Basis;
use crate::math::kernel::WeightKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MlsError;
use crate::primitives::point::DataPoint;

// ============================================================================
// Curve Point
// ============================================================================

/// One vertex of a sampled approximation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint<T> {
    /// Sampled abscissa.
    pub x: T,
    /// Approximated ordinate.
    pub y: T,
}

// ============================================================================
// Curve Sampler
// ============================================================================

/// Samples an evaluator across its data's x-range at a fixed step.
#[derive(Debug, Clone, Copy)]
pub struct CurveSampler<T: Float> {
    step: T,
}

impl<T: Float> CurveSampler<T> {
    /// Create a sampler with the given step; the step must be positive and
    /// finite.
    pub fn new(step: T) -> Result<Self, MlsError> {
        Validator::validate_sample_step(step)?;
        Ok(Self { step })
    }

    /// The configured sampling step.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// The grid of abscissas spanning the snapshot's x-range.
    ///
    /// Returns [`MlsError::EmptyPointSet`] for an empty snapshot.
    pub fn abscissas(&self, points: &[DataPoint<T>]) -> Result<Vec<T>, MlsError> {
        if points.is_empty() {
            return Err(MlsError::EmptyPointSet);
        }

        let mut lo = points[0].x;
        let mut hi = points[0].x;
        for point in points {
            lo = lo.min(point.x);
            hi = hi.max(point.x);
        }

        let count = ((hi - lo) / self.step).ceil().to_usize().unwrap_or(0) + 1;
        let mut xs = Vec::with_capacity(count);
        for i in 0..count {
            xs.push(lo + T::from(i).unwrap() * self.step);
        }
        Ok(xs)
    }

    /// Sample the evaluator over the full grid, skipping abscissas without
    /// sufficient support.
    pub fn sample<B, K>(&self, mls: &MlsEvaluator<T, B, K>) -> Result<Vec<CurvePoint<T>>, MlsError>
    where
        T: FloatLinalg,
        B: Basis<T>,
        K: WeightKernel<T>,
    {
        let xs = self.abscissas(mls.points())?;

        let mut curve = Vec::with_capacity(xs.len());
        for x in xs {
            match mls.evaluate(x) {
                Ok(y) => curve.push(CurvePoint { x, y }),
                // No line segment at this abscissa.
                Err(MlsError::InsufficientSupport { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(curve)
    }
}
