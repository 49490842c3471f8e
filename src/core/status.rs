//! Status codes for integrators

/// How an integration run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Interrupted,
    NeedLargerNmax,
    StepSizeTooSmall,
    ProbablyStiff,
}

impl Status {
    /// `true` when the integrator reached `xend`.
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}
