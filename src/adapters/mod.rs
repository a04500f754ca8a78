//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts the core evaluator to its two common collaborators:
//! - `CurveSampler` — a polyline consumer spanning the data's x-range at a
//!   fixed step
//! - `ScalingOscillator` — a parameter animator driving the scaling factor
//!   between configured bounds
//!
//! Both are pure callers of the evaluator's public surface.

/// Fixed-step curve sampling across the data's x-range.
pub mod sampler;

/// Time-driven oscillation of the scaling factor.
pub mod oscillator;
