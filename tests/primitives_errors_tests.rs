//! Tests for the error taxonomy.
//!
//! These tests verify:
//! - Display formatting for every variant
//! - Equality and cloning semantics
//! - The `std::error::Error` impl

use mls_rs::prelude::*;

// ============================================================================
// Display Formatting
// ============================================================================

#[test]
fn display_messages_carry_context() {
    assert_eq!(MlsError::EmptyPointSet.to_string(), "Point set is empty");

    assert_eq!(
        MlsError::InsufficientSupport { x: 3.5 }.to_string(),
        "Insufficient support at x=3.5: moment matrix is singular"
    );

    assert_eq!(
        MlsError::InvalidBasisDimension(0).to_string(),
        "Invalid basis dimension: 0 (must be at least 1)"
    );

    assert_eq!(
        MlsError::InvalidNumericValue("point 2 has non-finite y".into()).to_string(),
        "Invalid numeric value: point 2 has non-finite y"
    );

    assert_eq!(
        MlsError::MismatchedInputs { x_len: 4, y_len: 3 }.to_string(),
        "Length mismatch: x has 4 points, y has 3"
    );

    assert_eq!(
        MlsError::InvalidScalingBounds { min: 5.0, max: 1.0 }.to_string(),
        "Invalid scaling bounds: [5, 1] (must be finite with min <= max)"
    );

    assert_eq!(
        MlsError::InvalidSampleStep(-0.5).to_string(),
        "Invalid sample step: -0.5 (must be > 0 and finite)"
    );

    assert_eq!(
        MlsError::DuplicateParameter { parameter: "kernel" }.to_string(),
        "Parameter 'kernel' was set multiple times. Each parameter can only be configured once."
    );
}

// ============================================================================
// Semantics
// ============================================================================

#[test]
fn errors_are_cloneable_and_comparable() {
    let e = MlsError::InsufficientSupport { x: 2.0 };
    assert_eq!(e.clone(), e);
    assert_ne!(e, MlsError::InsufficientSupport { x: 3.0 });
    assert_ne!(e, MlsError::EmptyPointSet);
}

#[test]
fn error_implements_the_std_error_trait() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&MlsError::EmptyPointSet);
}
