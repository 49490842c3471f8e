use crate::Float;

use super::state::RumorState;

/// Work counters reported by the integrator for one simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub nfev: usize,
    pub nstep: usize,
    pub naccpt: usize,
    pub nrejct: usize,
}

/// Solved rumor trajectory: one state per time grid point.
#[derive(Debug, Clone)]
pub struct Trajectory {
    times: Vec<Float>,
    states: Vec<RumorState>,
    stats: SolverStats,
}

impl Trajectory {
    pub(crate) fn new(times: Vec<Float>, states: Vec<RumorState>, stats: SolverStats) -> Self {
        debug_assert_eq!(times.len(), states.len());
        Self {
            times,
            states,
            stats,
        }
    }

    /// The time grid, in days.
    pub fn times(&self) -> &[Float] {
        &self.times
    }

    pub fn states(&self) -> &[RumorState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    /// Iterate over `(t, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, &RumorState)> + '_ {
        self.times.iter().copied().zip(self.states.iter())
    }

    pub fn ignorant(&self) -> Vec<Float> {
        self.states.iter().map(|s| s.ignorant).collect()
    }

    pub fn spreaders(&self) -> Vec<Float> {
        self.states.iter().map(|s| s.spreaders).collect()
    }

    pub fn stiflers(&self) -> Vec<Float> {
        self.states.iter().map(|s| s.stiflers).collect()
    }

    pub fn initial(&self) -> Option<&RumorState> {
        self.states.first()
    }

    pub fn last(&self) -> Option<&RumorState> {
        self.states.last()
    }

    /// Time and value of the largest spreader fraction on the grid.
    pub fn peak_spreaders(&self) -> Option<(Float, Float)> {
        self.iter()
            .map(|(t, state)| (t, state.spreaders))
            .fold(None, |peak, (t, s)| match peak {
                Some((_, best)) if best >= s => peak,
                _ => Some((t, s)),
            })
    }

    /// Largest deviation of `I + S + R` from its initial value.
    pub fn max_conservation_error(&self) -> Float {
        let Some(initial) = self.initial() else {
            return 0.0;
        };
        let total = initial.total();
        self.states
            .iter()
            .map(|s| (s.total() - total).abs())
            .fold(0.0, Float::max)
    }
}
