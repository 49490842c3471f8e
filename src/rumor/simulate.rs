use bon::Builder;
use log::{debug, warn};

use crate::{
    Float,
    solve::{IVPOptions, Method, solve_ivp},
};

use super::{
    error::SimulationError,
    model::RumorModel,
    state::RumorState,
    trajectory::{SolverStats, Trajectory},
};

/// Default `rtol`/`atol`, matching the tolerance LSODA-based `odeint` uses.
pub const DEFAULT_TOLERANCE: Float = 1.49012e-8;

/// Relative slack allowed on `I0 + S0 + R0 = 1` in strict mode.
const FRACTION_SUM_TOL: Float = 1e-9;

/// Everything needed to run one simulation.
///
/// Only the rates are required; the rest defaults to a population of 99%
/// ignorants and 1% spreaders observed 10 times a day for 30 days.
///
/// ```rust
/// use rumor::prelude::*;
///
/// let trajectory = SimulationConfig::builder()
///     .beta(0.8)
///     .gamma(0.2)
///     .days(60.0)
///     .build()
///     .run()
///     .unwrap();
/// assert_eq!(trajectory.len(), 600);
/// ```
#[derive(Builder, Clone, Debug)]
pub struct SimulationConfig {
    /// Spreading rate.
    pub beta: Float,
    /// Stifling rate.
    pub gamma: Float,
    /// Initial ignorant fraction.
    #[builder(default = 0.99)]
    pub i0: Float,
    /// Initial spreader fraction.
    #[builder(default = 0.01)]
    pub s0: Float,
    /// Initial stifler fraction.
    #[builder(default = 0.0)]
    pub r0: Float,
    /// Simulated horizon in days.
    #[builder(default = 30.0)]
    pub days: Float,
    /// Grid density; the grid has `round(days * points_per_day)` points.
    #[builder(default = 10)]
    pub points_per_day: usize,
    /// Integrator. RK4 steps exactly on the grid spacing.
    #[builder(default)]
    pub method: Method,
    #[builder(default = DEFAULT_TOLERANCE)]
    pub rtol: Float,
    #[builder(default = DEFAULT_TOLERANCE)]
    pub atol: Float,
    /// Step budget handed to the integrator.
    pub nmax: Option<usize>,
    /// Reject negative rates, negative fractions, and fractions that do
    /// not sum to one. Off by default: such inputs are integrated as given.
    #[builder(default)]
    pub strict: bool,
}

impl SimulationConfig {
    /// Evenly spaced time grid over `[0, days]`, both ends included.
    pub fn time_grid(&self) -> Result<Vec<Float>, SimulationError> {
        if !self.days.is_finite() || self.days <= 0.0 {
            return Err(SimulationError::InvalidDays(self.days));
        }
        let num = (self.days * self.points_per_day as Float).round() as usize;
        if num == 0 {
            return Err(SimulationError::EmptyTimeGrid {
                days: self.days,
                points_per_day: self.points_per_day,
            });
        }
        Ok(linspace(0.0, self.days, num))
    }

    /// Integrate the model and sample it on [`time_grid`](Self::time_grid).
    pub fn run(&self) -> Result<Trajectory, SimulationError> {
        if self.strict {
            self.validate()?;
        }

        let grid = self.time_grid()?;
        let model = RumorModel::new(self.beta, self.gamma);
        let initial = RumorState::new(self.i0, self.s0, self.r0);

        debug!(
            "simulating rumor spread: beta = {}, gamma = {}, initial = {:?}, {} points over {} days",
            self.beta,
            self.gamma,
            initial,
            grid.len(),
            self.days
        );

        // A single grid point is the initial state itself
        if grid.len() == 1 {
            return Ok(Trajectory::new(grid, vec![initial], SolverStats::default()));
        }

        let first_step = match self.method {
            Method::RK4 => Some(grid[1] - grid[0]),
            Method::DOPRI5 => None,
        };
        let options = IVPOptions::builder()
            .method(self.method)
            .rtol(self.rtol)
            .atol(self.atol)
            .maybe_nmax(self.nmax)
            .maybe_first_step(first_step)
            .t_eval(grid.clone())
            .build();

        let sol = solve_ivp(&model, 0.0, self.days, &initial.to_array(), options)
            .map_err(SimulationError::Solver)?;

        if !sol.status.is_success() {
            warn!(
                "rumor simulation stopped at t = {} with status {:?}",
                sol.x, sol.status
            );
            return Err(SimulationError::Integration {
                status: sol.status,
                t: sol.x,
            });
        }
        if sol.y.len() != grid.len() {
            return Err(SimulationError::IncompleteTrajectory {
                expected: grid.len(),
                got: sol.y.len(),
            });
        }

        let states = sol
            .y
            .iter()
            .map(|y| RumorState::new(y[0], y[1], y[2]))
            .collect();
        let stats = SolverStats {
            nfev: sol.nfev,
            nstep: sol.nstep,
            naccpt: sol.naccpt,
            nrejct: sol.nrejct,
        };
        Ok(Trajectory::new(grid, states, stats))
    }

    fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [("beta", self.beta), ("gamma", self.gamma)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::NegativeRate { name, value });
            }
        }
        for (name, value) in [("i0", self.i0), ("s0", self.s0), ("r0", self.r0)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::NegativeFraction { name, value });
            }
        }
        let total = self.i0 + self.s0 + self.r0;
        if (total - 1.0).abs() > FRACTION_SUM_TOL {
            return Err(SimulationError::FractionsDoNotSumToOne(total));
        }
        Ok(())
    }
}

/// Simulate the rumor model from `(i0, s0, r0)` for `days` days.
///
/// Returns the trajectory sampled 10 times per day on `[0, days]`. No
/// validation is done on the rates or fractions; integrator failures are
/// returned as [`SimulationError::Integration`].
pub fn simulate(
    beta: Float,
    gamma: Float,
    i0: Float,
    s0: Float,
    r0: Float,
    days: Float,
) -> Result<Trajectory, SimulationError> {
    SimulationConfig::builder()
        .beta(beta)
        .gamma(gamma)
        .i0(i0)
        .s0(s0)
        .r0(r0)
        .days(days)
        .build()
        .run()
}

/// [`simulate`] with the default initial fractions (0.99, 0.01, 0.0) over 30 days.
pub fn simulate_rumor(beta: Float, gamma: Float) -> Result<Trajectory, SimulationError> {
    SimulationConfig::builder()
        .beta(beta)
        .gamma(gamma)
        .build()
        .run()
}

/// `num` evenly spaced values from `start` to `end` inclusive.
///
/// A single point yields `[start]`; the last point is exactly `end`.
pub fn linspace(start: Float, end: Float, num: usize) -> Vec<Float> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as Float;
            let mut points: Vec<Float> = (0..num).map(|i| start + step * i as Float).collect();
            points[num - 1] = end;
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_includes_both_ends() {
        let points = linspace(0.0, 30.0, 300);
        assert_eq!(points.len(), 300);
        assert_eq!(points[0], 0.0);
        assert_eq!(points[299], 30.0);
        assert_relative_eq!(points[1], 30.0 / 299.0, epsilon = 1e-15);
        assert!(points.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn grid_length_is_days_times_density() {
        let config = SimulationConfig::builder().beta(0.5).gamma(0.1).build();
        assert_eq!(config.time_grid().unwrap().len(), 300);

        let config = SimulationConfig::builder()
            .beta(0.5)
            .gamma(0.1)
            .days(2.5)
            .points_per_day(4)
            .build();
        assert_eq!(config.time_grid().unwrap().len(), 10);
    }

    #[test]
    fn non_positive_days_are_rejected() {
        for days in [0.0, -3.0, Float::NAN, Float::INFINITY] {
            let config = SimulationConfig::builder()
                .beta(0.5)
                .gamma(0.1)
                .days(days)
                .build();
            assert!(matches!(
                config.time_grid(),
                Err(SimulationError::InvalidDays(_))
            ));
        }
    }

    #[test]
    fn grid_that_rounds_to_nothing_is_rejected() {
        let config = SimulationConfig::builder()
            .beta(0.5)
            .gamma(0.1)
            .days(0.01)
            .build();
        assert_eq!(
            config.time_grid(),
            Err(SimulationError::EmptyTimeGrid {
                days: 0.01,
                points_per_day: 10
            })
        );
    }

    #[test]
    fn strict_mode_checks_inputs() {
        let base = || SimulationConfig::builder().beta(0.5).gamma(0.1).strict(true);

        assert!(base().build().validate().is_ok());
        assert_eq!(base().build().run().map(|t| t.len()), Ok(300));
        assert!(matches!(
            base().s0(0.5).build().run(),
            Err(SimulationError::FractionsDoNotSumToOne(total)) if (total - 1.49).abs() < 1e-12
        ));
        assert_eq!(
            base().r0(-0.01).i0(1.0).build().run().unwrap_err(),
            SimulationError::NegativeFraction {
                name: "r0",
                value: -0.01
            }
        );

        let err = SimulationConfig::builder()
            .beta(-1.0)
            .gamma(0.1)
            .strict(true)
            .build()
            .run()
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::NegativeRate {
                name: "beta",
                value: -1.0
            }
        );
    }
}
