//! Tests for the curve sampler and the scaling oscillator.
//!
//! These tests verify:
//! - The fixed-step abscissa grid (count, endpoints, overshoot)
//! - Skip-on-failure semantics during a sampling pass
//! - The cosine oscillation between configured scaling bounds
//! - Parameter validation for both adapters

use approx::assert_relative_eq;
use core::f64::consts::PI;

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
// Abscissa Grid
// ============================================================================

#[test]
fn grid_spans_the_data_range_at_the_configured_step() {
    let sampler = CurveSampler::new(0.05).unwrap();
    let mls = worked_example();

    let xs = sampler.abscissas(mls.points()).unwrap();
    // Range 4.0 at step 0.05: ceil(4 / 0.05) + 1 abscissas.
    assert_eq!(xs.len(), 81);
    assert_relative_eq!(xs[0], 1.0);
    assert_relative_eq!(xs[80], 5.0, epsilon = 1e-12);
}

#[test]
fn grid_overshoots_by_less_than_one_step_on_inexact_ranges() {
    let sampler = CurveSampler::new(0.3).unwrap();
    let points = [DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)];

    let xs = sampler.abscissas(&points).unwrap();
    // ceil(1.0 / 0.3) + 1 = 5 abscissas; the last lands past the data
    // maximum but within one step of it.
    assert_eq!(xs.len(), 5);
    let last = *xs.last().unwrap();
    assert!(last >= 1.0);
    assert!(last < 1.0 + 0.3);
}

#[test]
fn grid_for_a_single_point_is_that_point() {
    let sampler = CurveSampler::new(0.5).unwrap();
    let points = [DataPoint::new(2.5, 1.0)];

    let xs = sampler.abscissas(&points).unwrap();
    assert_eq!(xs, vec![2.5]);
}

#[test]
fn grid_requires_a_non_empty_snapshot() {
    let sampler = CurveSampler::<f64>::new(0.1).unwrap();
    assert_eq!(sampler.abscissas(&[]), Err(MlsError::EmptyPointSet));
}

// ============================================================================
// Sampling Pass
// ============================================================================

#[test]
fn sampling_the_worked_example_yields_a_full_polyline() {
    let sampler = CurveSampler::new(0.05).unwrap();
    let mls = worked_example();

    let curve = sampler.sample(&mls).unwrap();
    assert_eq!(curve.len(), 81);
    assert_relative_eq!(curve[0].x, 1.0);
    assert_relative_eq!(curve[40].x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(curve[40].y, 1.8333333333333333, max_relative = 1e-9);
}

#[test]
fn unsupported_abscissas_are_skipped_not_fatal() {
    // An isolated cluster and a far outlier: the gap between them has no
    // weighted support, so most grid abscissas produce no vertex.
    let mls = Mls::new()
        .points_from_pairs(&[(0.0, 1.0), (1.0, 2.0), (10.0, 5.0)])
        .basis(Linear)
        .scaling_factor(2.0)
        .build()
        .unwrap();
    let sampler = CurveSampler::new(1.0).unwrap();

    assert_eq!(sampler.abscissas(mls.points()).unwrap().len(), 11);

    let curve = sampler.sample(&mls).unwrap();
    // Only x=0 and x=1 see two linearly independent supported points.
    assert_eq!(curve.len(), 2);
    assert_relative_eq!(curve[0].x, 0.0);
    assert_relative_eq!(curve[1].x, 1.0);
}

#[test]
fn sampling_an_empty_evaluator_fails() {
    let mls = Mls::<f64>::new().scaling_factor(1.0).build().unwrap();
    let sampler = CurveSampler::new(0.1).unwrap();

    assert_eq!(sampler.sample(&mls), Err(MlsError::EmptyPointSet));
}

#[test]
fn sample_step_must_be_positive_and_finite() {
    for step in [0.0_f64, -0.5, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            CurveSampler::new(step),
            Err(MlsError::InvalidSampleStep(_))
        ));
    }
}

// ============================================================================
// Scaling Oscillator
// ============================================================================

#[test]
fn oscillator_traverses_min_to_max_and_back() {
    let osc = ScalingOscillator::new(1.0_f64, 5.0).unwrap();

    assert_relative_eq!(osc.value_at(0.0), 1.0);
    assert_relative_eq!(osc.value_at(PI / 2.0), 3.0);
    assert_relative_eq!(osc.value_at(PI), 5.0);
    assert_relative_eq!(osc.value_at(3.0 * PI / 2.0), 3.0, epsilon = 1e-12);
    assert_relative_eq!(osc.value_at(2.0 * PI), 1.0, epsilon = 1e-12);
}

#[test]
fn oscillator_stays_within_bounds() {
    let osc = ScalingOscillator::new(0.5_f64, 4.0).unwrap();

    let mut t = 0.0;
    while t < 20.0 {
        let v = osc.value_at(t);
        assert!((0.5..=4.0).contains(&v), "value {} escaped bounds at t={}", v, t);
        t += 0.37;
    }
}

#[test]
fn degenerate_bounds_pin_the_value() {
    let osc = ScalingOscillator::new(2.0_f64, 2.0).unwrap();

    for t in [0.0, 1.0, PI, 7.7] {
        assert_relative_eq!(osc.value_at(t), 2.0);
    }
}

#[test]
fn oscillator_rejects_invalid_bounds() {
    assert!(matches!(
        ScalingOscillator::new(5.0_f64, 1.0),
        Err(MlsError::InvalidScalingBounds { .. })
    ));
    assert!(matches!(
        ScalingOscillator::new(f64::NAN, 2.0),
        Err(MlsError::InvalidScalingBounds { .. })
    ));
    assert!(matches!(
        ScalingOscillator::new(1.0, f64::INFINITY),
        Err(MlsError::InvalidScalingBounds { .. })
    ));
}

#[test]
fn apply_drives_the_evaluator_scaling_factor() {
    let osc = ScalingOscillator::new(1.5_f64, 6.0).unwrap();
    let mut mls = worked_example();

    let applied = osc.apply(&mut mls, PI);
    assert_relative_eq!(applied, 6.0);
    assert_relative_eq!(mls.scaling_factor(), 6.0);

    osc.apply(&mut mls, 0.0);
    assert_relative_eq!(mls.scaling_factor(), 1.5);
}
