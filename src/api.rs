//! High-level API for MLS approximation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the basis, kernel, point set, and scaling factor,
//! ending in a validated [`MlsEvaluator`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration errors are deferred and surfaced at
//!   `build()`, including duplicate parameter detection.
//! * **Type-Safe**: Generic over `FloatLinalg` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`MlsBuilder`] via `Mls::new()`.
//! 2. Chain configuration methods (`.basis()`, `.kernel()`, `.points()`,
//!    `.scaling_factor()`).
//! 3. Call `.build()` to validate and obtain an evaluator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;
use crate::primitives::point;

// Publicly re-exported types
pub use crate::adapters::oscillator::ScalingOscillator;
pub use crate::adapters::sampler::{CurvePoint, CurveSampler};
pub use crate::engine::executor::MlsEvaluator;
pub use crate::math::basis::{Basis, PolynomialBasis};
pub use crate::math::kernel::{KernelFunction, WeightKernel};
pub use crate::primitives::errors::MlsError;
pub use crate::primitives::point::DataPoint;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an MLS evaluator.
#[derive(Debug, Clone)]
pub struct MlsBuilder<T: FloatLinalg> {
    /// Basis evaluator.
    pub basis: Option<PolynomialBasis>,

    /// Weight kernel.
    pub kernel: Option<KernelFunction>,

    /// Initial point-set snapshot.
    pub points: Option<Vec<DataPoint<T>>>,

    /// Initial scaling factor (defaults to the minimum clamp bound).
    pub scaling_factor: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    /// Error caught during configuration, surfaced at `build()`.
    #[doc(hidden)]
    pub deferred_error: Option<MlsError>,
}

impl<T: FloatLinalg> Default for MlsBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> MlsBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            basis: None,
            kernel: None,
            points: None,
            scaling_factor: None,
            duplicate_param: None,
            deferred_error: None,
        }
    }

    /// Set the polynomial basis (default: [`PolynomialBasis::Linear`]).
    pub fn basis(mut self, basis: PolynomialBasis) -> Self {
        if self.basis.is_some() {
            self.duplicate_param = Some("basis");
        }
        self.basis = Some(basis);
        self
    }

    /// Set the weight kernel (default: [`KernelFunction::CubicSpline`]).
    pub fn kernel(mut self, kernel: KernelFunction) -> Self {
        if self.kernel.is_some() {
            self.duplicate_param = Some("kernel");
        }
        self.kernel = Some(kernel);
        self
    }

    /// Set the initial point-set snapshot.
    pub fn points(mut self, points: Vec<DataPoint<T>>) -> Self {
        if self.points.is_some() {
            self.duplicate_param = Some("points");
        }
        self.points = Some(points);
        self
    }

    /// Set the initial point set from parallel `x` and `y` slices.
    ///
    /// A length mismatch is deferred and reported at `build()`.
    pub fn points_from_slices(mut self, x: &[T], y: &[T]) -> Self {
        if self.points.is_some() {
            self.duplicate_param = Some("points");
        }
        match point::points_from_slices(x, y) {
            Ok(points) => self.points = Some(points),
            Err(e) => self.deferred_error = Some(e),
        }
        self
    }

    /// Set the initial point set from `(x, y)` pairs.
    pub fn points_from_pairs(mut self, pairs: &[(T, T)]) -> Self {
        if self.points.is_some() {
            self.duplicate_param = Some("points");
        }
        self.points = Some(point::points_from_pairs(pairs));
        self
    }

    /// Set the initial scaling factor (clamped on construction).
    pub fn scaling_factor(mut self, value: T) -> Self {
        if self.scaling_factor.is_some() {
            self.duplicate_param = Some("scaling_factor");
        }
        self.scaling_factor = Some(value);
        self
    }

    /// Validate the configuration and build the evaluator.
    pub fn build(self) -> Result<MlsEvaluator<T>, MlsError> {
        if let Some(e) = self.deferred_error {
            return Err(e);
        }
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let basis = self.basis.unwrap_or_default();
        let kernel = self.kernel.unwrap_or_default();
        let points = self.points.unwrap_or_default();
        let scaling_factor = self.scaling_factor.unwrap_or_else(T::min_positive_value);

        MlsEvaluator::new(basis, points, kernel, scaling_factor)
    }
}
