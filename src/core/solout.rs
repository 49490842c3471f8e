//! User defined callback hook executed after each accepted step.

use crate::{Float, core::interpolate::Interpolate};

/// Return flags for [`SolOut`].
///
/// - `Continue`: proceed with integration as normal.
/// - `Interrupt`: stop integration and return control to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlag {
    Continue,
    Interrupt,
}

/// Callback hook executed after each accepted step.
///
/// `SolOut` is intended for user code that wants to observe the solution as
/// the integrator progresses. The callback is invoked once before the main
/// loop (with `xold == x`) and after every accepted step. The arguments are:
/// - `xold`: the previous abscissa (left end of the last accepted step),
/// - `x`: the new abscissa after the accepted step,
/// - `y`: the integrator's current solution at `x`,
/// - `interpolator`: dense output valid on `[xold, x]`.
///
/// Typical uses:
/// - sample the solution at equidistant output points by interpolating
///   inside `[xold, x]`;
/// - detect events and return `ControlFlag::Interrupt` to stop early.
///
/// # Example
///
/// ```ignore
/// struct Printer {
///     xout: f64,
///     dx: f64,
/// }
/// impl SolOut for Printer {
///     fn solout<I: Interpolate>(&mut self, xold: f64, x: f64, y: &[f64], interpolator: &I) -> ControlFlag {
///         let mut yi = y.to_vec();
///         while self.xout <= x {
///             interpolator.interpolate(self.xout, &mut yi);
///             println!("x = {}, y = {:?}", self.xout, yi);
///             self.xout += self.dx;
///         }
///         ControlFlag::Continue
///     }
/// }
/// ```
pub trait SolOut {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: &[Float],
        interpolator: &I,
    ) -> ControlFlag;
}

/// A [`SolOut`] that does nothing; fills the generic slot when no callback is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummySolOut;

impl SolOut for DummySolOut {
    fn solout<I: Interpolate>(
        &mut self,
        _xold: Float,
        _x: Float,
        _y: &[Float],
        _interpolator: &I,
    ) -> ControlFlag {
        ControlFlag::Continue
    }
}
