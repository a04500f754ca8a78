//! Time-driven oscillation of the scaling factor.
//!
//! ## Purpose
//!
//! This module provides [`ScalingOscillator`], which maps elapsed time to a
//! scaling factor oscillating smoothly between configured bounds via cosine
//! interpolation, and can push the value through the evaluator's public
//! setter.
//!
//! ## Design notes
//!
//! * **Pure caller**: The oscillator only uses `set_scaling_factor`; no
//!   coupling to the evaluator's internals.
//! * **Phase**: `t = 0` yields the minimum, `t = pi` the maximum, with
//!   period `2 pi`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::MlsEvaluator;
use crate::engine::validator::Validator;
use crate::math::basis::Basis;
use crate::math::kernel::WeightKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MlsError;

// ============================================================================
// Scaling Oscillator
// ============================================================================

/// Oscillates a scaling factor between `min` and `max` over elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct ScalingOscillator<T: Float> {
    min: T,
    max: T,
}

impl<T: Float> ScalingOscillator<T> {
    /// Create an oscillator with the given bounds; both must be finite with
    /// `min <= max`.
    pub fn new(min: T, max: T) -> Result<Self, MlsError> {
        Validator::validate_scaling_bounds(min, max)?;
        Ok(Self { min, max })
    }

    /// The lower bound.
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// The upper bound.
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// The oscillator value at `elapsed` seconds: a cosine interpolation
    /// `lerp(min, max, 0.5 - cos(t) / 2)`.
    #[inline]
    pub fn value_at(&self, elapsed: T) -> T {
        let half = T::from(0.5).unwrap();
        let interp = half - elapsed.cos() * half;
        self.min + (self.max - self.min) * interp
    }

    /// Compute the value at `elapsed` and apply it through the evaluator's
    /// scaling setter. Returns the applied (pre-clamp) value.
    pub fn apply<B, K>(&self, mls: &mut MlsEvaluator<T, B, K>, elapsed: T) -> T
    where
        T: FloatLinalg,
        B: Basis<T>,
        K: WeightKernel<T>,
    {
        let value = self.value_at(elapsed);
        mls.set_scaling_factor(value);
        value
    }
}
