//! Linear algebra backend abstraction for MLS.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the moment-matrix
//! solve, standardizing on the optimized nalgebra backend.
//!
//! ## Design notes
//!
//! * The numerical rank of the moment matrix is checked via SVD before
//!   solving; a rank-deficient matrix means the query lacks sufficient
//!   weighted support and yields `None`.
//! * Well-conditioned systems are solved by QR decomposition (Householder
//!   reflections), with an SVD solve as fallback.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the optimized nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the moment system `M c = p(x)`.
    ///
    /// `moment` is the flattened `k x k` moment matrix and `rhs` the basis
    /// vector at the query abscissa. Returns `None` when `M` is singular or
    /// numerically rank-deficient.
    fn solve_moment(moment: &[Self], rhs: &[Self], k: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_moment(moment: &[Self], rhs: &[Self], k: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_moment_f64(moment, rhs, k)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_moment(moment: &[Self], rhs: &[Self], k: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_moment_f32(moment, rhs, k)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve the moment system `M c = p(x)` using f64 precision.
    ///
    /// The numerical rank is checked first: a zero or rank-deficient matrix
    /// returns `None` instead of an unstable solution.
    pub fn solve_moment_f64(moment: &[f64], rhs: &[f64], k: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(k, k, moment);
        let rhs = DVector::from_column_slice(rhs);

        let svd = matrix.clone().svd(true, true);
        let max_sv = svd.singular_values.max();
        if !(max_sv > 0.0) || !max_sv.is_finite() {
            return None;
        }
        let tol = max_sv * f64::EPSILON * (k as f64) * 100.0;
        if svd.rank(tol) < k {
            return None;
        }

        let qr = matrix.qr();
        if let Some(solution) = qr.solve(&rhs) {
            return Some(solution.as_slice().to_vec());
        }

        svd.solve(&rhs, tol)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve the moment system `M c = p(x)` using f32 precision.
    pub fn solve_moment_f32(moment: &[f32], rhs: &[f32], k: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(k, k, moment);
        let rhs = DVector::from_column_slice(rhs);

        let svd = matrix.clone().svd(true, true);
        let max_sv = svd.singular_values.max();
        if !(max_sv > 0.0) || !max_sv.is_finite() {
            return None;
        }
        let tol = max_sv * f32::EPSILON * (k as f32) * 100.0;
        if svd.rank(tol) < k {
            return None;
        }

        let qr = matrix.qr();
        if let Some(solution) = qr.solve(&rhs) {
            return Some(solution.as_slice().to_vec());
        }

        svd.solve(&rhs, tol)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }
}
