//! Input validation for MLS configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for MLS configuration
//! parameters and input data. It checks requirements such as finite
//! coordinates, basis dimension, and adapter parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct invalid inputs (the scaling
//!   setter owns its clamp).
//! * This module does not perform the approximation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MlsError;
use crate::primitives::point::DataPoint;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for MLS configuration and input data.
///
/// Provides static methods for validating MLS parameters and input data.
/// All methods return `Result<(), MlsError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that the basis produces at least one term.
    pub fn validate_basis_dimension(k: usize) -> Result<(), MlsError> {
        if k < 1 {
            return Err(MlsError::InvalidBasisDimension(k));
        }
        Ok(())
    }

    /// Validate that every point in a snapshot has finite coordinates.
    pub fn validate_points<T: Float>(points: &[DataPoint<T>]) -> Result<(), MlsError> {
        for (i, point) in points.iter().enumerate() {
            if !point.is_finite() {
                return Err(MlsError::InvalidNumericValue(format!(
                    "point[{}]=({}, {})",
                    i,
                    point.x.to_f64().unwrap_or(f64::NAN),
                    point.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a query abscissa for finiteness.
    pub fn validate_query<T: Float>(x: T) -> Result<(), MlsError> {
        if !x.is_finite() {
            return Err(MlsError::InvalidNumericValue(format!(
                "query x={}",
                x.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Adapter-Specific Validation
    // ========================================================================

    /// Validate oscillator bounds: finite with `min <= max`.
    pub fn validate_scaling_bounds<T: Float>(min: T, max: T) -> Result<(), MlsError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(MlsError::InvalidScalingBounds {
                min: min.to_f64().unwrap_or(f64::NAN),
                max: max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the curve sampling step: positive and finite.
    pub fn validate_sample_step<T: Float>(step: T) -> Result<(), MlsError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(MlsError::InvalidSampleStep(
                step.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), MlsError> {
        if let Some(param) = duplicate_param {
            return Err(MlsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
