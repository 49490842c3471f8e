use thiserror::Error;

use crate::{Float, core::status::Status};

/// Errors returned by [`simulate`](super::simulate) and
/// [`SimulationConfig::run`](super::SimulationConfig::run).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("days must be a positive finite number (got {0})")]
    InvalidDays(Float),

    #[error("time grid is empty (days = {days}, points_per_day = {points_per_day})")]
    EmptyTimeGrid { days: Float, points_per_day: usize },

    #[error("invalid solver settings: {0:?}")]
    Solver(Vec<crate::Error>),

    #[error("integration stopped at t = {t} with status {status:?}")]
    Integration { status: Status, t: Float },

    #[error("integrator produced {got} samples for a time grid of {expected} points")]
    IncompleteTrajectory { expected: usize, got: usize },

    #[error("rate {name} must be non-negative and finite (got {value})")]
    NegativeRate { name: &'static str, value: Float },

    #[error("initial fraction {name} must be non-negative and finite (got {value})")]
    NegativeFraction { name: &'static str, value: Float },

    #[error("initial fractions sum to {0}, expected 1")]
    FractionsDoNotSumToOne(Float),
}
