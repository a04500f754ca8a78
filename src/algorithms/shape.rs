//! Shape-function computation for MLS approximation.
//!
//! ## Purpose
//!
//! This module provides the core fitting algorithm for MLS. At each query
//! abscissa it assembles the weighted moment matrix from the current point
//! snapshot, solves it against the query's basis vector, and produces the
//! per-point shape functions by which each sample's ordinate contributes to
//! the final estimate.
//!
//! ## Design notes
//!
//! * **Direct solve**: Solves `M c = p(x)` once per query instead of forming
//!   the explicit inverse. For the symmetric moment matrix,
//!   `phi_i * c^T p(x_i)` equals the explicit-inverse composition
//!   `phi_i * p(x)^T M^-1 p(x_i)`.
//! * **Transient state**: The moment matrix lives only for the duration of
//!   one call; nothing is cached across queries.
//! * **Generics**: Generic over `FloatLinalg` types and pluggable basis and
//!   kernel implementations.
//!
//! ## Key concepts
//!
//! * **Moment matrix**: `M(x) = sum_i phi_i * p(x_i) * p(x_i)^T`, stored as
//!   a flattened `k x k` buffer with symmetric accumulation.
//! * **Shape function**: `m_i(x) = phi_i * p(x)^T M^-1 * p(x_i)`, a scalar.
//!
//! ## Invariants
//!
//! * For a basis containing the constant term, the shape values sum to one.
//! * Rank deficiency is surfaced as `InsufficientSupport`, never as a NaN
//!   result.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by the engine).
//! * This module does not combine shape values with ordinates (handled by
//!   the evaluator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::basis::Basis;
use crate::math::kernel::WeightKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MlsError;
use crate::primitives::point::DataPoint;

// ============================================================================
// Shape Context
// ============================================================================

/// Context containing all data needed to compute shape functions at one query.
pub struct ShapeContext<'a, T, B, K>
where
    T: FloatLinalg,
    B: Basis<T>,
    K: WeightKernel<T>,
{
    /// Current point-set snapshot.
    pub points: &'a [DataPoint<T>],

    /// Basis evaluator (fixed dimension `k`).
    pub basis: &'a B,

    /// Weight kernel.
    pub kernel: &'a K,

    /// Scaling factor dilating the kernel's effective radius.
    pub scaling_factor: T,
}

impl<'a, T, B, K> ShapeContext<'a, T, B, K>
where
    T: FloatLinalg,
    B: Basis<T>,
    K: WeightKernel<T>,
{
    /// Compute the shape-function values `m_i(x)` for every point.
    ///
    /// Returns [`MlsError::InsufficientSupport`] when the weighted moment
    /// matrix is singular or near-singular at `x`.
    pub fn shape_values(&self, x: T) -> Result<Vec<T>, MlsError> {
        let n = self.points.len();
        if n == 0 {
            return Err(MlsError::EmptyPointSet);
        }

        let k = self.basis.dimension();

        // Fewer points than basis terms: the moment matrix is a sum of n
        // rank-1 outer products and cannot reach full rank.
        if n < k {
            return Err(Self::insufficient(x));
        }

        // Per-point kernel weights phi_i = K((x - x_i) / s).
        let mut weights = Vec::with_capacity(n);
        let mut weight_sum = T::zero();
        for point in self.points {
            let z = (x - point.x) / self.scaling_factor;
            let w = self.kernel.weight(z);
            weight_sum = weight_sum + w;
            weights.push(w);
        }
        if weight_sum <= T::epsilon() {
            return Err(Self::insufficient(x));
        }

        // Accumulate M += phi_i * p(x_i) * p(x_i)^T (symmetric fill).
        let mut moment = vec![T::zero(); k * k];
        let mut terms = Vec::with_capacity(k);
        for (point, &w) in self.points.iter().zip(&weights) {
            if w <= T::zero() {
                continue;
            }

            self.basis.evaluate_into(point.x, &mut terms);

            for i in 0..k {
                let wi = w * terms[i];
                for j in i..k {
                    let val = wi * terms[j];
                    moment[i * k + j] = moment[i * k + j] + val;
                    if j != i {
                        moment[j * k + i] = moment[j * k + i] + val;
                    }
                }
            }
        }

        // Solve M c = p(x); the shape value collapses to phi_i * c^T p(x_i).
        let mut query_terms = Vec::with_capacity(k);
        self.basis.evaluate_into(x, &mut query_terms);
        let coefficients =
            T::solve_moment(&moment, &query_terms, k).ok_or_else(|| Self::insufficient(x))?;

        let mut shapes = Vec::with_capacity(n);
        for (point, &w) in self.points.iter().zip(&weights) {
            if w <= T::zero() {
                shapes.push(T::zero());
                continue;
            }

            self.basis.evaluate_into(point.x, &mut terms);
            let dot = coefficients
                .iter()
                .zip(terms.iter())
                .fold(T::zero(), |acc, (&c, &t)| acc + c * t);
            shapes.push(w * dot);
        }

        Ok(shapes)
    }

    #[inline]
    fn insufficient(x: T) -> MlsError {
        MlsError::InsufficientSupport {
            x: x.to_f64().unwrap_or(f64::NAN),
        }
    }
}
