//! Tests for weight kernel functions.
//!
//! These tests verify:
//! - Pinned values of the cubic-spline kernel on both pieces
//! - Continuity at the piece boundaries
//! - Symmetry and non-negativity
//! - Compact support (exact zero beyond the cutoff)
//! - Support widening with the scaling factor

use approx::assert_relative_eq;

use mls_rs::prelude::*;

// ============================================================================
// Cubic-Spline Kernel
// ============================================================================

#[test]
fn cubic_spline_pinned_values() {
    assert_relative_eq!(CubicSpline.compute_weight(0.0_f64), 1.0);
    assert_relative_eq!(CubicSpline.compute_weight(0.25_f64), 0.71875);
    assert_relative_eq!(CubicSpline.compute_weight(0.5_f64), 0.25);
    assert_relative_eq!(CubicSpline.compute_weight(0.75_f64), 0.03125);
    assert_eq!(CubicSpline.compute_weight(1.0_f64), 0.0);
    assert_eq!(CubicSpline.compute_weight(1.5_f64), 0.0);
}

#[test]
fn cubic_spline_is_continuous_at_piece_boundaries() {
    let eps = 1e-9_f64;

    let below_half = CubicSpline.compute_weight(0.5 - eps);
    let above_half = CubicSpline.compute_weight(0.5 + eps);
    assert_relative_eq!(below_half, above_half, epsilon = 1e-7);

    let below_one = CubicSpline.compute_weight(1.0 - eps);
    assert!(below_one.abs() < 1e-7);
}

#[test]
fn cubic_spline_is_symmetric() {
    for z in [0.1_f64, 0.3, 0.5, 0.7, 0.9, 1.2] {
        assert_relative_eq!(
            CubicSpline.compute_weight(z),
            CubicSpline.compute_weight(-z)
        );
    }
}

// ============================================================================
// General Kernel Properties
// ============================================================================

#[test]
fn all_kernels_are_non_negative() {
    let kernels = [CubicSpline, Tricube, Epanechnikov, Triangle, Uniform, Gaussian];

    for kernel in kernels {
        let mut z = -2.0_f64;
        while z <= 2.0 {
            assert!(
                kernel.compute_weight(z) >= 0.0,
                "{} produced a negative weight at z={}",
                kernel.name(),
                z
            );
            z += 0.01;
        }
    }
}

#[test]
fn bounded_kernels_vanish_outside_support() {
    let bounded = [CubicSpline, Tricube, Epanechnikov, Triangle, Uniform];

    for kernel in bounded {
        assert_eq!(kernel.support(), Some((-1.0, 1.0)));
        assert_eq!(kernel.compute_weight(1.0_f64), 0.0);
        assert_eq!(kernel.compute_weight(-1.0_f64), 0.0);
        assert_eq!(kernel.compute_weight(7.3_f64), 0.0);
    }
}

#[test]
fn gaussian_is_unbounded_and_positive() {
    assert_eq!(Gaussian.support(), None);
    assert!(Gaussian.compute_weight(3.0_f64) > 0.0);
    // Beyond the cutoff the weight degrades to the smallest positive value,
    // never to an exact zero.
    assert!(Gaussian.compute_weight(10.0_f64) > 0.0);
}

#[test]
fn larger_scaling_factor_widens_support() {
    // Number of points with non-zero weight at a fixed query is
    // non-decreasing as the scaling factor increases.
    let xs = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
    let query = 3.0;

    let mut previous = 0;
    for s in [0.6_f64, 1.0, 2.0, 4.0] {
        let count = xs
            .iter()
            .filter(|&&x| CubicSpline.compute_weight((query - x) / s) > 0.0)
            .count();
        assert!(count >= previous, "support shrank at s={}", s);
        previous = count;
    }
    assert_eq!(previous, xs.len());
}
