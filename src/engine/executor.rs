//! The MLS evaluator — the sole query surface.
//!
//! ## Purpose
//!
//! This module provides [`MlsEvaluator`], which holds the current point-set
//! snapshot, the configured basis and kernel, and the clamped scaling
//! factor, and evaluates the approximated function at arbitrary abscissas.
//!
//! ## Design notes
//!
//! * **Snapshot semantics**: The evaluator owns an immutable copy of the
//!   point set; the external owner replaces it wholesale between evaluation
//!   passes via [`MlsEvaluator::set_points`].
//! * **Stateless queries**: `evaluate` borrows `&self` and caches nothing,
//!   so independent queries against one snapshot may run in parallel.
//! * **Clamped scaling**: The scaling-factor setter never fails; it clamps
//!   into `[T::min_positive_value(), T::max_value()]` and collapses NaN to
//!   the minimum bound.
//!
//! ## Invariants
//!
//! * A failed evaluation leaves the evaluator's state untouched.
//! * The stored scaling factor is always finite and strictly positive.
//!
//! ## Non-goals
//!
//! * This module does not own a live point collection or synchronize
//!   concurrent mutation; callers supply point-in-time snapshots.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::shape::ShapeContext;
use crate::engine::validator::Validator;
use crate::math::basis::{Basis, PolynomialBasis};
use crate::math::kernel::{KernelFunction, WeightKernel};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MlsError;
use crate::primitives::point::DataPoint;

// ============================================================================
// MLS Evaluator
// ============================================================================

/// Moving Least Squares evaluator over a scattered 2-D point snapshot.
///
/// Construction normally goes through the fluent builder
/// (`Mls::new()...build()`); [`MlsEvaluator::new`] is the direct constructor
/// for custom basis or kernel implementations.
#[derive(Debug, Clone)]
pub struct MlsEvaluator<T, B = PolynomialBasis, K = KernelFunction>
where
    T: FloatLinalg,
    B: Basis<T>,
    K: WeightKernel<T>,
{
    basis: B,
    kernel: K,
    points: Vec<DataPoint<T>>,
    scaling_factor: T,
}

impl<T, B, K> MlsEvaluator<T, B, K>
where
    T: FloatLinalg,
    B: Basis<T>,
    K: WeightKernel<T>,
{
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an evaluator from its four components.
    ///
    /// The basis dimension must be at least 1 and every point finite; the
    /// scaling factor is clamped into the valid range.
    pub fn new(
        basis: B,
        points: Vec<DataPoint<T>>,
        kernel: K,
        scaling_factor: T,
    ) -> Result<Self, MlsError> {
        Validator::validate_basis_dimension(basis.dimension())?;
        Validator::validate_points(&points)?;

        Ok(Self {
            basis,
            kernel,
            points,
            scaling_factor: Self::clamp_scaling(scaling_factor),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The current point-set snapshot.
    #[inline]
    pub fn points(&self) -> &[DataPoint<T>] {
        &self.points
    }

    /// The configured basis evaluator.
    #[inline]
    pub fn basis(&self) -> &B {
        &self.basis
    }

    /// The configured weight kernel.
    #[inline]
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The current (clamped) scaling factor.
    #[inline]
    pub fn scaling_factor(&self) -> T {
        self.scaling_factor
    }

    /// The clamp range for the scaling factor.
    #[inline]
    pub fn scaling_bounds() -> (T, T) {
        (T::min_positive_value(), T::max_value())
    }

    // ========================================================================
    // Mutation (between evaluation passes)
    // ========================================================================

    /// Replace the point set wholesale; takes effect on the next `evaluate`.
    ///
    /// An empty snapshot is accepted here and only rejected at evaluation
    /// time. Rejects non-finite coordinates without touching the current
    /// snapshot.
    pub fn set_points(&mut self, points: Vec<DataPoint<T>>) -> Result<(), MlsError> {
        Validator::validate_points(&points)?;
        self.points = points;
        Ok(())
    }

    /// Clamp and store a new scaling factor; takes effect on the next
    /// `evaluate`. Never fails: out-of-range and non-finite inputs collapse
    /// to the nearest bound (NaN to the minimum).
    #[inline]
    pub fn set_scaling_factor(&mut self, value: T) {
        self.scaling_factor = Self::clamp_scaling(value);
    }

    #[inline]
    fn clamp_scaling(value: T) -> T {
        let (min, max) = Self::scaling_bounds();
        if value.is_nan() {
            return min;
        }
        value.max(min).min(max)
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Evaluate the approximated function at `x`.
    ///
    /// Fails with [`MlsError::EmptyPointSet`] for a zero-point snapshot and
    /// [`MlsError::InsufficientSupport`] when the weighted moment matrix is
    /// singular or near-singular at `x`.
    pub fn evaluate(&self, x: T) -> Result<T, MlsError> {
        let shapes = self.shape_functions(x)?;

        let mut acc = T::zero();
        for (point, &m) in self.points.iter().zip(&shapes) {
            acc = acc + point.y * m;
        }

        // A near-singular system that slipped past the rank check must not
        // leak a non-finite result.
        if !acc.is_finite() {
            return Err(MlsError::InsufficientSupport {
                x: x.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(acc)
    }

    /// Compute the shape-function values `m_i(x)`, one per point.
    ///
    /// `evaluate(x)` is `sum_i y_i * m_i(x)`; for a basis containing the
    /// constant term the values sum to one.
    pub fn shape_functions(&self, x: T) -> Result<Vec<T>, MlsError> {
        Validator::validate_query(x)?;

        ShapeContext {
            points: &self.points,
            basis: &self.basis,
            kernel: &self.kernel,
            scaling_factor: self.scaling_factor,
        }
        .shape_values(x)
    }
}
