//! DOPRI5 - Dormand–Prince 5(4) explicit Runge–Kutta integrator
//!
//! Reference
//! - E. Hairer, S. P. Nørsett, and G. Wanner, "Solving Ordinary Differential
//!   Equations I. Nonstiff Problems", 2nd ed., Springer (1993).
//!

use log::trace;

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        ode::ODE,
        solout::{ControlFlag, SolOut},
        solution::Solution,
        status::Status,
    },
    error::Error,
    methods::{
        hinit::hinit,
        settings::{Settings, Tolerance},
    },
};

/// Dormand–Prince DOPRI5, an explicit embedded Runge–Kutta 5(4) solver with
/// adaptive step-size control and dense output.
///
/// Integrates the system `y' = f(x, y)` from `x` to `xend` starting at `y0`.
/// Each accepted step is reported to `solout` together with a 4th order
/// continuous interpolant valid on the step.
///
/// # Arguments
///
/// - `f`: Right‑hand side implementing `ODE`.
/// - `x`: Initial independent variable value.
/// - `xend`: Final independent variable value.
/// - `y0`: Initial state.
/// - `rtol`, `atol`: Relative and absolute tolerances (see [`Tolerance`]).
/// - `solout`: Callback invoked at the initial point and after every accepted step.
/// - `settings`: Optional integrator settings. Defaults:
///   - `uround` `2.3e-16`
///   - `safety_factor` `0.9`
///   - `scale_min` `0.2`, `scale_max` `10.0`
///   - `beta` `0.04` (Lund stabilization)
///   - `hmax` `|xend - x|`
///   - `h0` heuristic via `hinit`
///   - `nmax` `100_000`
///   - `nstiff` `1000`
///
/// # Returns
/// A [`Solution`] on success or a vector of every [`Error`] found while
/// validating the inputs. Numerical trouble is reported through
/// [`Solution::status`], not as an error.
pub fn dopri5<F, S>(
    f: &F,
    mut x: Float,
    xend: Float,
    y0: &[Float],
    rtol: Tolerance,
    atol: Tolerance,
    solout: &mut S,
    settings: Settings,
) -> Result<Solution, Vec<Error>>
where
    F: ODE,
    S: SolOut,
{
    let n = y0.len();

    // --- Input Validation ---
    let mut errors: Vec<Error> = Vec::new();

    // Rounding Unit
    let uround = match settings.uround {
        Some(u) => {
            if u <= 1e-35 || u >= 1.0 {
                errors.push(Error::URoundOutOfRange(u));
            }
            u
        }
        None => 2.3e-16,
    };

    // Safety Factor
    let safety_factor = match settings.safety_factor {
        Some(f) => {
            if f >= 1.0 || f <= 1e-4 {
                errors.push(Error::SafetyFactorOutOfRange(f));
            }
            f
        }
        None => 0.9,
    };

    // Parameters for step size selection
    let facc1 = settings.scale_min.map_or(5.0, |f| 1.0 / f);
    let facc2 = settings.scale_max.map_or(0.1, |f| 1.0 / f);

    // Beta for step control stabilization
    let beta = match settings.beta {
        Some(b) => {
            if b > 0.2 {
                errors.push(Error::BetaTooLarge(b));
            }
            b.max(0.0)
        }
        None => 0.04,
    };

    // Maximum step size
    let hmax = settings.hmax.map_or((xend - x).abs(), |h| h.abs());

    // Initial step size
    if let Some(h0) = settings.h0 {
        if h0 == 0.0 || !h0.is_finite() {
            errors.push(Error::InvalidStepSize(h0));
        }
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

    // Number of steps before performing a stiffness test
    let nstiff = match settings.nstiff {
        Some(0) => {
            errors.push(Error::NStiffMustBePositive(0));
            0
        }
        Some(nstiff) => nstiff,
        None => 1000,
    };

    // Tolerance dimensions
    for tol in [&rtol, &atol] {
        if let Some(len) = tol.len() {
            if len != n {
                errors.push(Error::ToleranceLength {
                    expected: n,
                    got: len,
                });
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // --- Declarations ---
    let mut y = y0.to_vec();
    let mut k1 = vec![0.0; n];
    let mut k2 = vec![0.0; n];
    let mut k3 = vec![0.0; n];
    let mut k4 = vec![0.0; n];
    let mut k5 = vec![0.0; n];
    let mut k6 = vec![0.0; n];
    let mut k7 = vec![0.0; n];
    let mut y1 = vec![0.0; n];
    let mut ysti = vec![0.0; n];
    let mut cont = vec![0.0; 5 * n];
    let mut facold: Float = 1e-4;
    let mut last = false;
    let mut reject = false;
    let mut nonstiff = 0;
    let mut iasti = 0;
    let mut hlamb: Float = 0.0;
    let mut nfev = 0;
    let mut nstep = 0;
    let mut naccpt = 0;
    let mut nrejct = 0;
    let mut xold = x;
    let expo1 = 0.2 - beta * 0.75;
    let posneg: Float = if xend >= x { 1.0 } else { -1.0 };

    // --- Initializations ---
    f.ode(x, &y, &mut k1);
    nfev += 1;
    let mut h = match settings.h0 {
        Some(h0) => h0.abs() * posneg,
        None if x == xend => 0.0,
        None => {
            nfev += 1;
            hinit(
                f, x, &y, posneg, &k1, &mut k2, &mut y1, 5, hmax, &atol, &rtol,
            )
        }
    };

    // Initial SolOut call; the interpolant is constant at y until a step is accepted
    cont[..n].copy_from_slice(&y);
    if solout.solout(xold, x, &y, &DenseOutput::new(&cont, xold, h)) == ControlFlag::Interrupt {
        return Ok(Solution {
            x,
            y,
            h,
            nfev,
            nstep,
            naccpt,
            nrejct,
            status: Status::Interrupted,
        });
    }

    // Nothing to integrate over an empty interval
    if x == xend {
        return Ok(Solution {
            x,
            y,
            h,
            nfev,
            nstep,
            naccpt,
            nrejct,
            status: Status::Success,
        });
    }

    // --- Main integration loop ---
    let status = loop {
        // Check for maximum number of steps
        if nstep >= nmax {
            break Status::NeedLargerNmax;
        }

        // Check for underflow due to machine rounding
        if 0.1 * h.abs() <= x.abs() * uround {
            break Status::StepSizeTooSmall;
        }

        // Adjust last step to land on xend
        if (x + 1.01 * h - xend) * posneg > 0.0 {
            h = xend - x;
            last = true;
        }

        nstep += 1;

        // Stage 2
        for i in 0..n {
            y1[i] = y[i] + h * A21 * k1[i];
        }
        f.ode(x + C2 * h, &y1, &mut k2);

        // Stage 3
        for i in 0..n {
            y1[i] = y[i] + h * (A31 * k1[i] + A32 * k2[i]);
        }
        f.ode(x + C3 * h, &y1, &mut k3);

        // Stage 4
        for i in 0..n {
            y1[i] = y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
        }
        f.ode(x + C4 * h, &y1, &mut k4);

        // Stage 5
        for i in 0..n {
            y1[i] = y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
        }
        f.ode(x + C5 * h, &y1, &mut k5);

        // Stage 6
        for i in 0..n {
            ysti[i] =
                y[i] + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
        }
        let xph = x + h;
        f.ode(xph, &ysti, &mut k6);

        // Final stage (FSAL)
        for i in 0..n {
            y1[i] =
                y[i] + h * (A71 * k1[i] + A73 * k3[i] + A74 * k4[i] + A75 * k5[i] + A76 * k6[i]);
        }
        f.ode(xph, &y1, &mut k7);
        nfev += 6;

        // Error estimation
        let mut err: Float = 0.0;
        for i in 0..n {
            let ek =
                h * (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k7[i]);
            let sk = atol[i] + rtol[i] * y[i].abs().max(y1[i].abs());
            err += (ek / sk) * (ek / sk);
        }
        err = (err / n as Float).sqrt();

        // Computation of hnew
        let fac11 = err.powf(expo1);
        // Lund-Stabilization
        let mut fac = fac11 / facold.powf(beta);
        // We require facc2 <= h/hnew <= facc1
        fac = facc2.max(facc1.min(fac / safety_factor));
        let mut hnew = h / fac;

        if err <= 1.0 {
            // Step accepted
            facold = err.max(1.0e-4);
            naccpt += 1;

            // Stiffness detection
            if naccpt % nstiff == 0 || iasti > 0 {
                let mut stnum: Float = 0.0;
                let mut stden: Float = 0.0;
                for i in 0..n {
                    let d1 = k7[i] - k6[i];
                    let d2 = y1[i] - ysti[i];
                    stnum += d1 * d1;
                    stden += d2 * d2;
                }
                if stden > 0.0 {
                    hlamb = h.abs() * (stnum / stden).sqrt();
                }
                if hlamb > 3.25 {
                    nonstiff = 0;
                    iasti += 1;
                    if iasti == 15 {
                        break Status::ProbablyStiff;
                    }
                } else {
                    nonstiff += 1;
                    if nonstiff == 6 {
                        iasti = 0;
                    }
                }
            }

            // Prepare dense output
            for i in 0..n {
                let ydiff = y1[i] - y[i];
                let bspl = h * k1[i] - ydiff;
                cont[i] = y[i];
                cont[n + i] = ydiff;
                cont[2 * n + i] = bspl;
                cont[3 * n + i] = ydiff - h * k7[i] - bspl;
                cont[4 * n + i] = h
                    * (D1 * k1[i] + D3 * k3[i] + D4 * k4[i] + D5 * k5[i] + D6 * k6[i] + D7 * k7[i]);
            }

            // Update state variables
            k1.copy_from_slice(&k7);
            y.copy_from_slice(&y1);
            xold = x;
            x = xph;

            if solout.solout(xold, x, &y, &DenseOutput::new(&cont, xold, h))
                == ControlFlag::Interrupt
            {
                break Status::Interrupted;
            }

            // Normal exit
            if last {
                h = hnew;
                break Status::Success;
            }

            // Check for step size limits
            if hnew.abs() > hmax {
                hnew = posneg * hmax;
            }

            // Prevent oscillations due to previous rejected step
            if reject {
                hnew = posneg * hnew.abs().min(h.abs());
                reject = false;
            }
        } else {
            // Step rejected
            hnew = h / facc1.min(fac11 / safety_factor);
            reject = true;
            nrejct += 1;
            last = false;
            trace!("dopri5: rejected step at x = {x}, h = {h}, err = {err}");
        }
        h = hnew;
    };

    Ok(Solution {
        x,
        y,
        h,
        nfev,
        nstep,
        naccpt,
        nrejct,
        status,
    })
}

/// Continuous output function for DOPRI5
pub fn contdp5(xi: Float, yi: &mut [Float], cont: &[Float], xold: Float, h: Float) {
    let n = cont.len() / 5;
    let theta = if h == 0.0 { 0.0 } else { (xi - xold) / h };
    let theta1 = 1.0 - theta;
    for i in 0..n {
        yi[i] = cont[i]
            + theta
                * (cont[n + i]
                    + theta1
                        * (cont[2 * n + i] + theta * (cont[3 * n + i] + theta1 * cont[4 * n + i])));
    }
}

/// Dense output interpolator for DOPRI5
struct DenseOutput<'a> {
    cont: &'a [Float],
    xold: Float,
    h: Float,
}

impl<'a> DenseOutput<'a> {
    fn new(cont: &'a [Float], xold: Float, h: Float) -> Self {
        Self { cont, xold, h }
    }
}

impl Interpolate for DenseOutput<'_> {
    fn interpolate(&self, xi: Float, yi: &mut [Float]) {
        contdp5(xi, yi, self.cont, self.xold, self.h);
    }
}

// DOPRI5 Butcher tableau coefficients
const C2: Float = 0.2;
const C3: Float = 0.3;
const C4: Float = 0.8;
const C5: Float = 8.0 / 9.0;

const A21: Float = 0.2;
const A31: Float = 3.0 / 40.0;
const A32: Float = 9.0 / 40.0;
const A41: Float = 44.0 / 45.0;
const A42: Float = -56.0 / 15.0;
const A43: Float = 32.0 / 9.0;
const A51: Float = 19372.0 / 6561.0;
const A52: Float = -25360.0 / 2187.0;
const A53: Float = 64448.0 / 6561.0;
const A54: Float = -212.0 / 729.0;
const A61: Float = 9017.0 / 3168.0;
const A62: Float = -355.0 / 33.0;
const A63: Float = 46732.0 / 5247.0;
const A64: Float = 49.0 / 176.0;
const A65: Float = -5103.0 / 18656.0;
const A71: Float = 35.0 / 384.0;
const A73: Float = 500.0 / 1113.0;
const A74: Float = 125.0 / 192.0;
const A75: Float = -2187.0 / 6784.0;
const A76: Float = 11.0 / 84.0;

const E1: Float = 71.0 / 57600.0;
const E3: Float = -71.0 / 16695.0;
const E4: Float = 71.0 / 1920.0;
const E5: Float = -17253.0 / 339200.0;
const E6: Float = 22.0 / 525.0;
const E7: Float = -1.0 / 40.0;

const D1: Float = -12715105075.0 / 11282082432.0;
const D3: Float = 87487479700.0 / 32700410799.0;
const D4: Float = -10690763975.0 / 1880347072.0;
const D5: Float = 701980252875.0 / 199316789632.0;
const D6: Float = -1453857185.0 / 822651844.0;
const D7: Float = 69997945.0 / 29380423.0;
