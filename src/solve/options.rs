//! Options and method selection for solve_ivp

use bon::Builder;

use crate::{Float, methods::settings::Tolerance};

/// Solver method selection (roughly mirroring scipy.integrate.solve_ivp)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// Dormand–Prince 5(4) adaptive RK (`RK45` in SciPy)
    #[default]
    DOPRI5,
    /// Classic fixed-step RK4
    RK4,
}

#[derive(Builder, Clone, Debug)]
/// Options for solve_ivp similar to SciPy
pub struct IVPOptions {
    /// Method to use. Default: DOPRI5 (Dormand–Prince 5(4)).
    #[builder(default)]
    pub method: Method,
    /// Relative tolerance for error estimation. Ignored by RK4.
    #[builder(default = Tolerance::Scalar(1e-6), into)]
    pub rtol: Tolerance,
    /// Absolute tolerance for error estimation. Ignored by RK4.
    #[builder(default = Tolerance::Scalar(1e-6), into)]
    pub atol: Tolerance,
    /// Maximum number of allowed steps.
    pub nmax: Option<usize>,
    /// Points where the solution is requested, ordered in the direction of
    /// integration. Points outside the integration span are not sampled.
    pub t_eval: Option<Vec<Float>>,
    /// Initial step suggestion (maps to `settings.h0`). For RK4 this is the
    /// fixed step; default `(xend - x0) / 100`.
    pub first_step: Option<Float>,
    /// Maximum step size (maps to `settings.hmax`).
    pub max_step: Option<Float>,
    /// Save step endpoints (initial call and each accepted step).
    /// Default: `true` when `t_eval` is not given, `false` otherwise.
    pub save_step_endpoints: Option<bool>,
}

impl Default for IVPOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
