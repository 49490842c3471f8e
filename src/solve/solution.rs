//! Rich solution type for solve_ivp: sampled data and stats.

use crate::{Float, core::status::Status};

/// Rich solution of solve_ivp: sampled data plus basic stats
#[derive(Debug, Clone)]
pub struct IVPSolution {
    /// Sample times (requested `t_eval` points and/or step endpoints).
    pub t: Vec<Float>,
    /// Solution at each sample time.
    pub y: Vec<Vec<Float>>,
    /// Abscissa the integrator stopped at.
    pub x: Float,
    pub nfev: usize,
    pub nstep: usize,
    pub naccpt: usize,
    pub nrejct: usize,
    pub status: Status,
}

impl IVPSolution {
    /// Iterate over stored sample pairs (t_i, y_i) from the discrete output.
    pub fn iter(&self) -> SolutionIter<'_> {
        SolutionIter {
            t_iter: self.t.iter(),
            y_iter: self.y.iter(),
        }
    }
}

/// Iterator over (t, y) pairs of stored samples in an IVPSolution.
pub struct SolutionIter<'a> {
    t_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Vec<Float>>,
}

impl<'a> Iterator for SolutionIter<'a> {
    type Item = (Float, &'a [Float]);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.t_iter.next(), self.y_iter.next()) {
            (Some(&t), Some(y)) => Some((t, y.as_slice())),
            _ => None,
        }
    }
}
