//! # MLS — Moving Least Squares approximation for Rust
//!
//! A small, deterministic Moving Least Squares (MLS) implementation for
//! reconstructing a smooth scalar function from a scattered, mutable set of
//! 2-D sample points.
//!
//! ## What is MLS?
//!
//! Moving Least Squares is a local weighted-regression technique: at every
//! query abscissa `x` it solves a small weighted least-squares problem anew,
//! using a compact-support weight kernel to decide how strongly each sample
//! influences the estimate. The result is a smooth, data-adaptive curve with
//! no global functional form.
//!
//! For a query `x`, a basis `p` of dimension `k` and per-point weights
//! `phi_i = K((x - x_i) / s)`:
//!
//! 1. Assemble the moment matrix `M(x) = sum_i phi_i * p(x_i) * p(x_i)^T`.
//! 2. Solve `M(x) c = p(x)`.
//! 3. Form the shape functions `m_i(x) = phi_i * c^T p(x_i)`.
//! 4. The estimate is `sum_i y_i * m_i(x)`.
//!
//! The shape functions of a basis containing the constant term sum to one,
//! and for data lying exactly in the span of the basis the estimate
//! reproduces the data function — the MLS reproducing property.
//!
//! ## Quick Start
//!
//! ```rust
//! use mls_rs::prelude::*;
//!
//! let mls = Mls::new()
//!     .points_from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.4, 2.3, 1.7, 1.9, 2.7])
//!     .basis(Linear)
//!     .kernel(CubicSpline)
//!     .scaling_factor(2.0)
//!     .build()?;
//!
//! let y: f64 = mls.evaluate(3.0)?;
//! assert!((y - 1.8333).abs() < 1e-3);
//! # Result::<(), MlsError>::Ok(())
//! ```
//!
//! ## Mutable point sets
//!
//! The evaluator owns an immutable snapshot of the sample set. An external
//! owner (an interactive scene, a data feed) replaces the snapshot wholesale
//! between evaluation passes:
//!
//! ```rust
//! use mls_rs::prelude::*;
//!
//! let mut mls = Mls::new()
//!     .points_from_slices(&[1.0, 2.0, 3.0], &[0.5, 0.9, 0.4])
//!     .scaling_factor(2.0)
//!     .build()?;
//!
//! // A point was dragged; hand the evaluator the new snapshot.
//! mls.set_points(vec![
//!     DataPoint::new(1.0, 0.5),
//!     DataPoint::new(2.0, 1.2),
//!     DataPoint::new(3.0, 0.4),
//! ])?;
//!
//! let y = mls.evaluate(2.0)?;
//! # let _ = y;
//! # Result::<(), MlsError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `evaluate` returns `Result<T, MlsError>`. A query with no (or not enough
//! linearly independent) weighted support yields
//! `MlsError::InsufficientSupport` rather than a silent NaN; an evaluation
//! against zero points yields `MlsError::EmptyPointSet`. Failures are local
//! to the call and never corrupt the evaluator's state.
//!
//! ```rust
//! use mls_rs::prelude::*;
//!
//! let mls = Mls::new()
//!     .points_from_slices(&[1.0, 2.0, 3.0], &[0.5, 0.9, 0.4])
//!     .scaling_factor(2.0)
//!     .build()?;
//!
//! // Far outside the kernel support of every sample.
//! assert!(matches!(
//!     mls.evaluate(50.0),
//!     Err(MlsError::InsufficientSupport { .. })
//! ));
//! # Result::<(), MlsError>::Ok(())
//! ```
//!
//! ## Curve sampling and parameter animation
//!
//! Two adapters cover the common consumers of the core:
//!
//! * `CurveSampler` spans the data's x-range at a fixed step and evaluates
//!   each abscissa, producing a polyline. Abscissas without sufficient
//!   support are skipped instead of failing the pass.
//! * `ScalingOscillator` maps elapsed time to a scaling factor oscillating
//!   smoothly between configured bounds, for animating the kernel's
//!   effective radius.
//!
//! ## `no_std` support
//!
//! Disable default features for `no_std` environments (an allocator is still
//! required):
//!
//! ```toml
//! [dependencies]
//! mls-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Lancaster, P. & Salkauskas, K. (1981). "Surfaces Generated by Moving
//!   Least Squares Methods"
//! - Levin, D. (1998). "The Approximation Power of Moving Least-Squares"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the `DataPoint` sample type, point-set construction helpers,
// and the `MlsError` error taxonomy.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains basis evaluators, weight kernels for distance-based weighting,
// and the linear algebra backend for the moment-matrix solve.
mod math;

// Layer 3: Algorithms - core MLS algorithms.
//
// Contains moment-matrix assembly and shape-function computation
// (via `ShapeContext`).
mod algorithms;

// Layer 4: Engine - validation and evaluation control.
//
// Contains input validation and the `MlsEvaluator` query surface.
mod engine;

// Layer 5: Adapters - collaborator-facing adapters.
//
// Contains the curve sampler (polyline consumer) and the scaling-factor
// oscillator (parameter animation).
mod adapters;

// High-level fluent API for MLS approximation.
//
// Provides the `Mls` builder for configuring and constructing an evaluator.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard MLS prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use mls_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Basis, CurvePoint, CurveSampler, DataPoint,
        KernelFunction::{CubicSpline, Epanechnikov, Gaussian, Triangle, Tricube, Uniform},
        MlsBuilder as Mls, MlsError, MlsEvaluator,
        PolynomialBasis::{Constant, Cubic, Linear, Quadratic, Quartic},
        ScalingOscillator, WeightKernel,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
