//! SciPy-like solve_ivp entry point implementation

use log::debug;

use crate::{
    Float,
    core::{ode::ODE, solout::{DummySolOut, SolOut}},
    error::Error,
    methods::{dp::dopri5, rk::rk4, settings::Settings},
};

use super::{
    options::{IVPOptions, Method},
    solout::DefaultSolOut,
    solution::IVPSolution,
};

/// Solve an initial value problem with SciPy-like options.
///
/// Integrates `f` from `x0` to `xend` starting at `y0`. When
/// `options.t_eval` is given the solution is sampled there through the
/// method's dense output. Invalid options are returned as `Err`; numerical
/// failures end up in [`IVPSolution::status`].
pub fn solve_ivp<F>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: &[Float],
    options: IVPOptions,
) -> Result<IVPSolution, Vec<Error>>
where
    F: ODE,
{
    solve_ivp_with::<F, DummySolOut>(f, x0, xend, y0, options, None)
}

/// Like [`solve_ivp`], additionally invoking `solout` after sampling at the
/// initial point and each accepted step. Returning
/// [`ControlFlag::Interrupt`](crate::core::solout::ControlFlag::Interrupt)
/// stops the integration with what was sampled so far.
pub fn solve_ivp_with<F, S>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: &[Float],
    options: IVPOptions,
    solout: Option<&mut S>,
) -> Result<IVPSolution, Vec<Error>>
where
    F: ODE,
    S: SolOut,
{
    let settings = Settings::builder()
        .maybe_nmax(options.nmax)
        .maybe_h0(options.first_step)
        .maybe_hmax(options.max_step)
        .build();

    let direction: Float = if xend >= x0 { 1.0 } else { -1.0 };
    let save_endpoints = options
        .save_step_endpoints
        .unwrap_or(options.t_eval.is_none());
    let mut default_solout =
        DefaultSolOut::new(options.t_eval.as_deref(), direction, save_endpoints, solout);

    debug!(
        "solve_ivp: method = {:?}, span = [{x0}, {xend}], n = {}",
        options.method,
        y0.len()
    );

    // Dispatch by method
    let sol = match options.method {
        Method::RK4 => {
            let h = options
                .first_step
                .map_or((xend - x0) / 100.0, |h| h.abs() * direction);
            rk4(f, x0, xend, y0, h, &mut default_solout, settings)
        }
        Method::DOPRI5 => dopri5(
            f,
            x0,
            xend,
            y0,
            options.rtol,
            options.atol,
            &mut default_solout,
            settings,
        ),
    }?;

    debug!(
        "solve_ivp: {:?} at x = {} after {} steps ({} accepted, {} rejected, {} evaluations)",
        sol.status, sol.x, sol.nstep, sol.naccpt, sol.nrejct, sol.nfev
    );

    let (t, y) = default_solout.into_data();
    Ok(IVPSolution {
        t,
        y,
        x: sol.x,
        nfev: sol.nfev,
        nstep: sol.nstep,
        naccpt: sol.naccpt,
        nrejct: sol.nrejct,
        status: sol.status,
    })
}
