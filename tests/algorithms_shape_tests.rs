//! Tests for shape-function computation.
//!
//! These tests verify:
//! - Partition of unity for bases containing the constant term
//! - Pinned shape values for the worked example
//! - Order independence of the moment-matrix accumulation
//! - Compact support reflected in zero shape values

use approx::assert_relative_eq;

use mls_rs::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn worked_example() -> MlsEvaluator<f64> {
    Mls::new()
        .points_from_slices(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.4, 2.3, 1.7, 1.9, 2.7])
        .basis(Linear)
        .kernel(CubicSpline)
        .scaling_factor(2.0)
        .build()
        .unwrap()
}

// ============================================================================
// Partition of Unity
// ============================================================================

#[test]
fn shape_values_sum_to_one() {
    let mls = worked_example();

    for x in [1.0, 1.7, 3.0, 4.2, 5.0] {
        let shapes = mls.shape_functions(x).unwrap();
        let sum: f64 = shapes.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-10);
    }
}

#[test]
fn shape_values_sum_to_one_for_constant_basis() {
    let mls = Mls::new()
        .points_from_slices(&[1.0, 2.0, 3.0], &[0.4, 0.9, 0.3])
        .basis(Constant)
        .scaling_factor(3.0)
        .build()
        .unwrap();

    let shapes = mls.shape_functions(2.0).unwrap();
    let sum: f64 = shapes.iter().sum();
    assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
}

// ============================================================================
// Pinned Shape Values
// ============================================================================

#[test]
fn worked_example_shape_values_at_center() {
    let mls = worked_example();

    // At x=3 with scaling 2 the outermost points carry zero weight and the
    // interior shapes collapse to {1/6, 2/3, 1/6}.
    let shapes = mls.shape_functions(3.0).unwrap();
    assert_eq!(shapes.len(), 5);
    assert_eq!(shapes[0], 0.0);
    assert_relative_eq!(shapes[1], 1.0 / 6.0, epsilon = 1e-10);
    assert_relative_eq!(shapes[2], 2.0 / 3.0, epsilon = 1e-10);
    assert_relative_eq!(shapes[3], 1.0 / 6.0, epsilon = 1e-10);
    assert_eq!(shapes[4], 0.0);
}

#[test]
fn points_outside_support_have_zero_shape_value() {
    let mls = worked_example();

    let shapes = mls.shape_functions(1.0).unwrap();
    // x=4 and x=5 are beyond the kernel radius of 2 from the query.
    assert_eq!(shapes[3], 0.0);
    assert_eq!(shapes[4], 0.0);
}

// ============================================================================
// Order Independence
// ============================================================================

#[test]
fn evaluation_is_invariant_under_point_permutation() {
    let forward = Mls::new()
        .points_from_pairs(&[(1.0, 1.4), (2.0, 2.3), (3.0, 1.7), (4.0, 1.9), (5.0, 2.7)])
        .scaling_factor(2.0)
        .build()
        .unwrap();
    let shuffled = Mls::new()
        .points_from_pairs(&[(4.0, 1.9), (1.0, 1.4), (5.0, 2.7), (3.0, 1.7), (2.0, 2.3)])
        .scaling_factor(2.0)
        .build()
        .unwrap();

    for x in [1.3, 2.0, 3.0, 4.6] {
        assert_relative_eq!(
            forward.evaluate(x).unwrap(),
            shuffled.evaluate(x).unwrap(),
            epsilon = 1e-12
        );
    }
}
