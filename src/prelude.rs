//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use rumor::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `Interpolate`, `SolOut`, `ControlFlag`, `Solution`, `Status`.
//! - Solver API: `solve_ivp`, `solve_ivp_with`, `IVPOptions`, `IVPSolution`, `Method`, `Settings`.
//! - Rumor model: `RumorModel`, `RumorState`, `SimulationConfig`, `Trajectory`, `simulate`.
//!

pub use crate::core::{
    interpolate::Interpolate,
    ode::ODE,
    solout::{ControlFlag, DummySolOut, SolOut},
    solution::Solution,
    status::Status,
};
pub use crate::methods::settings::{Settings, Tolerance};
pub use crate::rumor::{
    RumorModel, RumorState, SimulationConfig, SimulationError, SolverStats, Trajectory,
    simulate, simulate_rumor,
};
pub use crate::solve::{IVPOptions, IVPSolution, Method, solve_ivp, solve_ivp_with};
