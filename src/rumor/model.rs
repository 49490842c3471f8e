use crate::{Float, core::ode::ODE};

use super::state::RumorState;

/// Rate constants of the rumor model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RumorModel {
    /// Ignorant → spreader conversion rate on contact.
    pub beta: Float,
    /// Spreader → stifler conversion rate.
    pub gamma: Float,
}

impl RumorModel {
    pub fn new(beta: Float, gamma: Float) -> Self {
        Self { beta, gamma }
    }

    /// Instantaneous rates `(dI/dt, dS/dt, dR/dt)` at `state`.
    ///
    /// Any real input is accepted, including states that are not valid
    /// population fractions.
    pub fn derivatives(&self, state: &RumorState) -> [Float; 3] {
        let RumorState {
            ignorant: i,
            spreaders: s,
            stiflers: r,
        } = *state;

        let spreading = self.beta * i * s;
        let stifling = self.gamma * s * (s + r);
        [-spreading, spreading - stifling, stifling]
    }
}

impl ODE for RumorModel {
    // The model is autonomous; `t` is unused.
    fn ode(&self, _t: Float, y: &[Float], dydt: &mut [Float]) {
        let state = RumorState::new(y[0], y[1], y[2]);
        dydt.copy_from_slice(&self.derivatives(&state));
    }
}
