//! Errors for integration methods

use thiserror::Error;

use crate::Float;

/// Validation errors returned by the integrator entry points.
///
/// Integrators check every setting before stepping and report all violations
/// at once, so these usually arrive as a `Vec<Error>`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("nmax must be positive (got {0})")]
    NMaxMustBePositive(usize),

    #[error("nstiff must be positive (got {0})")]
    NStiffMustBePositive(usize),

    #[error("uround must be in (1e-35, 1.0) (got {0})")]
    URoundOutOfRange(Float),

    #[error("safety_factor must be in (1e-4, 1.0) (got {0})")]
    SafetyFactorOutOfRange(Float),

    #[error("beta must be <= 0.2 (got {0})")]
    BetaTooLarge(Float),

    #[error("step size h has invalid sign or is zero (got {0})")]
    InvalidStepSize(Float),

    #[error("tolerance vector has length {got}, expected {expected}")]
    ToleranceLength { expected: usize, got: usize },
}
