use crate::Float;

/// Population fractions at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RumorState {
    /// Fraction unaware of the rumor (`I`).
    pub ignorant: Float,
    /// Fraction actively spreading the rumor (`S`).
    pub spreaders: Float,
    /// Fraction that has stopped spreading (`R`).
    pub stiflers: Float,
}

impl RumorState {
    pub fn new(ignorant: Float, spreaders: Float, stiflers: Float) -> Self {
        Self {
            ignorant,
            spreaders,
            stiflers,
        }
    }

    /// `I + S + R`; stays at its initial value along any trajectory.
    pub fn total(&self) -> Float {
        self.ignorant + self.spreaders + self.stiflers
    }

    /// State in `[I, S, R]` order, the layout the integrators work on.
    pub fn to_array(&self) -> [Float; 3] {
        [self.ignorant, self.spreaders, self.stiflers]
    }
}

impl From<[Float; 3]> for RumorState {
    fn from([ignorant, spreaders, stiflers]: [Float; 3]) -> Self {
        Self::new(ignorant, spreaders, stiflers)
    }
}

impl From<RumorState> for [Float; 3] {
    fn from(state: RumorState) -> Self {
        state.to_array()
    }
}
