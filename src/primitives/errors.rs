//! Error types for MLS operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! or querying an MLS evaluator: configuration mistakes, degenerate point
//! sets, and queries without sufficient weighted support.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the relevant values (e.g., the query
//!   abscissa that lacked support).
//! * **Deferred**: Builder errors are caught during configuration and
//!   surfaced at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//!
//! ## Key concepts
//!
//! 1. **Configuration**: Invalid basis dimension, duplicate builder
//!    parameters, mismatched input slices.
//! 2. **Support failures**: Singular or near-singular moment matrix at a
//!    query point, empty point set.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Support failures are distinct from configuration errors so callers can
//!   treat "no curve segment here" differently from "bad setup".
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for MLS operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MlsError {
    /// Evaluation was attempted against a point set with zero points.
    EmptyPointSet,

    /// The weighted moment matrix is singular or near-singular at the query
    /// abscissa: no points carry weight there, or too few linearly
    /// independent basis directions are represented.
    InsufficientSupport {
        /// The query abscissa that lacked support.
        x: f64,
    },

    /// The basis evaluator must produce at least one basis term.
    InvalidBasisDimension(usize),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// `x` and `y` slices must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` slice.
        x_len: usize,
        /// Number of elements in the `y` slice.
        y_len: usize,
    },

    /// Oscillator bounds must be finite with `min <= max`.
    InvalidScalingBounds {
        /// The lower bound provided.
        min: f64,
        /// The upper bound provided.
        max: f64,
    },

    /// Curve sampling step must be positive and finite.
    InvalidSampleStep(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MlsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyPointSet => write!(f, "Point set is empty"),
            Self::InsufficientSupport { x } => {
                write!(f, "Insufficient support at x={x}: moment matrix is singular")
            }
            Self::InvalidBasisDimension(k) => {
                write!(f, "Invalid basis dimension: {k} (must be at least 1)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidScalingBounds { min, max } => {
                write!(
                    f,
                    "Invalid scaling bounds: [{min}, {max}] (must be finite with min <= max)"
                )
            }
            Self::InvalidSampleStep(step) => {
                write!(f, "Invalid sample step: {step} (must be > 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MlsError {}
