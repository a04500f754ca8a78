//! Basis evaluators for MLS approximation.
//!
//! ## Purpose
//!
//! This module provides basis functions that map a scalar abscissa to a
//! fixed-length column vector of basis terms — the local model the MLS
//! estimate is built from.
//!
//! ## Design notes
//!
//! * **Purity**: A basis evaluator is a pure, total, deterministic function
//!   of its abscissa; no state, no domain restriction.
//! * **Fixed dimension**: The output dimension `k` is fixed for the lifetime
//!   of one evaluator and must be at least 1.
//! * **Pluggable**: The [`Basis`] trait is the seam; [`PolynomialBasis`]
//!   covers the monomial families, custom implementations plug in through
//!   the same trait.
//!
//! ## Invariants
//!
//! * `evaluate_into` always produces exactly `dimension()` terms.
//! * A basis containing the constant term makes the MLS shape functions a
//!   partition of unity.
//!
//! ## Non-goals
//!
//! * This module does not weight or combine basis vectors; that is the
//!   algorithms layer's job.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Basis Trait
// ============================================================================

/// A pure basis evaluator of fixed output dimension.
pub trait Basis<T: Float> {
    /// Number of basis terms `k` (fixed, at least 1).
    fn dimension(&self) -> usize;

    /// Evaluate the basis at `x`, replacing the contents of `out` with
    /// exactly [`dimension()`](Basis::dimension) terms.
    fn evaluate_into(&self, x: T, out: &mut Vec<T>);
}

// ============================================================================
// Polynomial Basis
// ============================================================================

/// Monomial basis `{1, x, x^2, ...}` for local polynomial approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolynomialBasis {
    /// Degree 0: `{1}` — locally weighted mean.
    Constant,

    /// Degree 1: `{1, x}` (default).
    #[default]
    Linear,

    /// Degree 2: `{1, x, x^2}`.
    Quadratic,

    /// Degree 3: `{1, x, x^2, x^3}`.
    Cubic,

    /// Degree 4: `{1, x, x^2, x^3, x^4}`.
    Quartic,
}

impl PolynomialBasis {
    /// Get the name of the basis.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            PolynomialBasis::Constant => "Constant",
            PolynomialBasis::Linear => "Linear",
            PolynomialBasis::Quadratic => "Quadratic",
            PolynomialBasis::Cubic => "Cubic",
            PolynomialBasis::Quartic => "Quartic",
        }
    }

    /// Get the polynomial degree.
    #[inline]
    pub const fn degree(&self) -> usize {
        match self {
            PolynomialBasis::Constant => 0,
            PolynomialBasis::Linear => 1,
            PolynomialBasis::Quadratic => 2,
            PolynomialBasis::Cubic => 3,
            PolynomialBasis::Quartic => 4,
        }
    }

    /// Number of basis terms (`degree + 1`).
    #[inline]
    pub const fn terms(&self) -> usize {
        self.degree() + 1
    }
}

impl<T: Float> Basis<T> for PolynomialBasis {
    #[inline]
    fn dimension(&self) -> usize {
        self.terms()
    }

    fn evaluate_into(&self, x: T, out: &mut Vec<T>) {
        out.clear();
        out.push(T::one());

        // Successive powers up to the configured degree.
        let mut power = T::one();
        for _ in 0..self.degree() {
            power = power * x;
            out.push(power);
        }
    }
}
