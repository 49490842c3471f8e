//! Ignorant/Spreader/Stifler rumor-spreading model.
//!
//! A population is split into three fractions: ignorants `I` who have not
//! heard the rumor, spreaders `S` who pass it on, and stiflers `R` who know
//! it but have stopped spreading. Spreaders convert ignorants at rate
//! `beta` and are stifled at rate `gamma` when they meet anyone who already
//! knows the rumor:
//!
//! ```text
//! dI/dt = -beta I S
//! dS/dt =  beta I S - gamma S (S + R)
//! dR/dt =  gamma S (S + R)
//! ```
//!
//! The right-hand sides sum to zero, so `I + S + R` is conserved.

mod error;
mod model;
mod simulate;
mod state;
mod trajectory;

pub use error::SimulationError;
pub use model::RumorModel;
pub use simulate::{SimulationConfig, linspace, simulate, simulate_rumor};
pub use state::RumorState;
pub use trajectory::{SolverStats, Trajectory};
