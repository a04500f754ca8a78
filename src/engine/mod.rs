//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates evaluation: input validation (`Validator`) and
//! the `MlsEvaluator` query surface holding the point snapshot, the basis,
//! the kernel, and the clamped scaling factor.

/// Input validation for MLS configuration and data.
pub mod validator;

/// The MLS evaluator — the sole query surface.
pub mod executor;
