//! Kernel (weight) functions for MLS approximation.
//!
//! ## Purpose
//!
//! This module provides weight kernels that map a scaled, signed distance
//! `z = (x - x_i) / s` to a non-negative influence. Compact support keeps
//! the moment matrix local: points beyond the cutoff contribute nothing.
//!
//! ## Design notes
//!
//! * **Normalization**: The caller scales distances by the scaling factor
//!   before invoking the kernel.
//! * **Support**: All kernels except Gaussian are bounded on [-1, 1] and
//!   return exactly zero outside it.
//! * **Pluggable**: The [`WeightKernel`] trait is the seam; any non-negative,
//!   continuous, compact-support function is a valid substitute.
//!
//! ## Key concepts
//!
//! * **CubicSpline**: The default kernel — a C1 piecewise cubic with
//!   support on [-1, 1].
//!
//! ## Invariants
//!
//! * Kernels are non-negative (K(z) >= 0) and symmetric (K(z) = K(-z)).
//! * Bounded kernels return exactly zero outside their support.
//!
//! ## Non-goals
//!
//! * This module does not perform weight normalization.
//! * This module does not choose the scaling factor.

// External dependencies
use num_traits::Float;

// ============================================================================
// Mathematical Constants
// ============================================================================

/// Cutoff for Gaussian kernel evaluation.
///
/// Beyond this normalized distance, the Gaussian kernel value is effectively
/// zero (exp(-6^2/2) approx 6.9e-9). This prevents numerical underflow.
const GAUSSIAN_CUTOFF: f64 = 6.0;

// ============================================================================
// WeightKernel Trait
// ============================================================================

/// A pure weight kernel mapping a scaled distance to a non-negative influence.
pub trait WeightKernel<T: Float> {
    /// Compute the weight for the scaled, signed distance `z`.
    fn weight(&self, z: T) -> T;

    /// The support interval outside which the weight is exactly zero, or
    /// `None` for unbounded kernels.
    fn support(&self) -> Option<(f64, f64)> {
        Some((-1.0, 1.0))
    }
}

// ============================================================================
// Kernel Function Enum
// ============================================================================

/// Weight function (kernel) for MLS approximation.
///
/// Each kernel defines a function K: ℝ → [0, ∞) that maps scaled distances
/// to weights. Bounded kernels have support on [-1, 1], while the Gaussian
/// kernel has unbounded support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelFunction {
    /// Piecewise cubic spline kernel (default):
    ///
    /// ```text
    /// |z| <= 0.5      → 1 - 6z^2 + 6|z|^3
    /// 0.5 < |z| <= 1  → 2 - 6|z| + 6z^2 - 2|z|^3
    /// |z| > 1         → 0
    /// ```
    #[default]
    CubicSpline,

    /// Tricube kernel: K(z) = (1 - |z|^3)^3 for |z| < 1.
    Tricube,

    /// Epanechnikov kernel: K(z) = (1 - z^2) for |z| < 1.
    Epanechnikov,

    /// Triangular (linear) kernel: K(z) = (1 - |z|) for |z| < 1.
    Triangle,

    /// Uniform (rectangular) kernel: K(z) = 1 for |z| < 1.
    Uniform,

    /// Gaussian kernel: K(z) = exp(-z^2 / 2).
    Gaussian,
}

impl KernelFunction {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the kernel.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            KernelFunction::CubicSpline => "CubicSpline",
            KernelFunction::Tricube => "Tricube",
            KernelFunction::Epanechnikov => "Epanechnikov",
            KernelFunction::Triangle => "Triangle",
            KernelFunction::Uniform => "Uniform",
            KernelFunction::Gaussian => "Gaussian",
        }
    }

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            KernelFunction::Gaussian => None, // Unbounded
            _ => Some((-1.0, 1.0)),           // All others are bounded on [-1, 1]
        }
    }

    /// Returns `true` if the kernel has bounded support.
    #[inline]
    fn is_bounded(&self) -> bool {
        self.support().is_some()
    }

    // ========================================================================
    // Weight Computation
    // ========================================================================

    /// Compute the weight K(z) for a given scaled distance.
    #[inline]
    pub fn compute_weight<T: Float>(&self, z: T) -> T {
        let abs_z = z.abs();

        // Fast path for bounded kernels: return 0 if outside support
        if self.is_bounded() && abs_z >= T::one() {
            return T::zero();
        }

        match self {
            KernelFunction::CubicSpline => {
                let half = T::from(0.5).unwrap();
                let two = T::from(2.0).unwrap();
                let six = T::from(6.0).unwrap();
                let z2 = abs_z * abs_z;
                let z3 = z2 * abs_z;

                if abs_z <= half {
                    T::one() - six * z2 + six * z3
                } else {
                    two - six * abs_z + six * z2 - two * z3
                }
            }

            KernelFunction::Tricube => {
                let tmp = T::one() - abs_z * abs_z * abs_z;
                tmp * tmp * tmp
            }

            KernelFunction::Epanechnikov => T::one() - abs_z * abs_z,

            KernelFunction::Triangle => T::one() - abs_z,

            KernelFunction::Uniform => T::one(),

            KernelFunction::Gaussian => {
                // Convert to f64 for exponential calculation
                let z_f64 = abs_z.to_f64().unwrap_or(f64::INFINITY);

                // Use cutoff to avoid underflow to zero
                if z_f64 > GAUSSIAN_CUTOFF {
                    T::from(f64::MIN_POSITIVE).unwrap_or_else(T::zero)
                } else {
                    let val = (-0.5 * z_f64 * z_f64).exp().max(f64::MIN_POSITIVE);
                    T::from(val).unwrap_or_else(T::zero)
                }
            }
        }
    }
}

impl<T: Float> WeightKernel<T> for KernelFunction {
    #[inline]
    fn weight(&self, z: T) -> T {
        self.compute_weight(z)
    }

    #[inline]
    fn support(&self) -> Option<(f64, f64)> {
        KernelFunction::support(self)
    }
}
