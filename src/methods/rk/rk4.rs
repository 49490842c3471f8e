//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{
    Float,
    core::{
        interpolate::CubicHermite,
        ode::ODE,
        solout::{ControlFlag, SolOut},
        solution::Solution,
        status::Status,
    },
    error::Error,
    methods::settings::Settings,
};

/// Classical explicit Runge-Kutta 4 (RK4) fixed-step integrator.
///
/// Steps with a constant `h` except for the final step, which is shortened
/// so the integration lands exactly on `xend`. Provides a dense output via
/// cubic Hermite interpolation. Only `settings.nmax` is used.
pub fn rk4<F, S>(
    f: &F,
    mut x: Float,
    xend: Float,
    y0: &[Float],
    h: Float,
    solout: &mut S,
    settings: Settings,
) -> Result<Solution, Vec<Error>>
where
    F: ODE,
    S: SolOut,
{
    // --- Input Validation ---
    let mut errors = Vec::new();

    // Step size must point from x towards xend
    let direction: Float = if xend >= x { 1.0 } else { -1.0 };
    if x != xend && (h == 0.0 || !h.is_finite() || h.signum() != direction) {
        errors.push(Error::InvalidStepSize(h));
    }

    // Maximum Number of Steps
    let nmax = match settings.nmax {
        Some(0) => {
            errors.push(Error::NMaxMustBePositive(0));
            0
        }
        Some(nmax) => nmax,
        None => 100_000,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    // --- Declarations ---
    let n = y0.len();
    let mut y = y0.to_vec();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut yt = vec![0.0; n];
    let mut yold = vec![0.0; n];
    let mut k1old = vec![0.0; n];
    let mut nfev = 0;
    let mut nstep = 0;
    let mut hstep = h;

    // --- Initializations ---
    f.ode(x, &y, &mut k1);
    nfev += 1;
    let interp = CubicHermite::new(x, 0.0, &y, &y, &k1, &k1);
    if solout.solout(x, x, &y, &interp) == ControlFlag::Interrupt {
        return Ok(Solution {
            x,
            y,
            h,
            nfev,
            nstep,
            naccpt: nstep,
            nrejct: 0,
            status: Status::Interrupted,
        });
    }

    let status = if x == xend {
        Status::Success
    } else {
        // --- Main integration loop ---
        loop {
            // Check for maximum number of steps
            if nstep >= nmax {
                break Status::NeedLargerNmax;
            }

            // Shorten the last step so we land exactly on xend
            let last = (x + 1.01 * h - xend) * direction > 0.0;
            hstep = if last { xend - x } else { h };

            // Stage computations
            for i in 0..n {
                yt[i] = y[i] + hstep * A21 * k1[i];
            }
            f.ode(x + C2 * hstep, &yt, &mut k2);

            for i in 0..n {
                yt[i] = y[i] + hstep * A32 * k2[i];
            }
            f.ode(x + C3 * hstep, &yt, &mut k3);

            for i in 0..n {
                yt[i] = y[i] + hstep * A43 * k3[i];
            }
            f.ode(x + C4 * hstep, &yt, &mut k4);

            // Store previous state for the interpolant
            let xold = x;
            yold.copy_from_slice(&y);
            k1old.copy_from_slice(&k1);

            // Update state
            x = if last { xend } else { x + hstep };
            for i in 0..n {
                y[i] += hstep * (B1 * k1[i] + B2 * k2[i] + B3 * k3[i] + B4 * k4[i]);
            }
            f.ode(x, &y, &mut k1);

            nfev += 4;
            nstep += 1;

            let interp = CubicHermite::new(xold, hstep, &yold, &y, &k1old, &k1);
            if solout.solout(xold, x, &y, &interp) == ControlFlag::Interrupt {
                break Status::Interrupted;
            }

            if last {
                break Status::Success;
            }
        }
    };

    Ok(Solution {
        x,
        y,
        h: hstep,
        nfev,
        nstep,
        naccpt: nstep,
        nrejct: 0,
        status,
    })
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
