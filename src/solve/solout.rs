//! Default SolOut that implements t_eval sampling and endpoint recording; wraps a user SolOut.

use crate::{
    Float,
    core::{
        interpolate::Interpolate,
        solout::{ControlFlag, SolOut},
    },
};

/// Relative slack used when matching requested times against step endpoints.
const TIME_TOL: Float = 1e-12;

pub(crate) struct DefaultSolOut<'a, S: SolOut> {
    t_eval: Option<&'a [Float]>,
    direction: Float,
    save_endpoints: bool,
    next_idx: usize,
    t: Vec<Float>,
    y: Vec<Vec<Float>>,
    user: Option<&'a mut S>,
}

impl<'a, S: SolOut> DefaultSolOut<'a, S> {
    pub(crate) fn new(
        t_eval: Option<&'a [Float]>,
        direction: Float,
        save_endpoints: bool,
        user: Option<&'a mut S>,
    ) -> Self {
        Self {
            t_eval,
            direction,
            save_endpoints,
            next_idx: 0,
            t: Vec::new(),
            y: Vec::new(),
            user,
        }
    }

    pub(crate) fn into_data(self) -> (Vec<Float>, Vec<Vec<Float>>) {
        (self.t, self.y)
    }
}

impl<S: SolOut> SolOut for DefaultSolOut<'_, S> {
    fn solout<I: Interpolate>(
        &mut self,
        xold: Float,
        x: Float,
        y: &[Float],
        interpolator: &I,
    ) -> ControlFlag {
        if self.save_endpoints {
            self.t.push(x);
            self.y.push(y.to_vec());
        }

        // Sample every requested time up to x; step endpoints are copied exactly
        if let Some(te) = self.t_eval {
            let tol = TIME_TOL * x.abs().max(1.0);
            while let Some(&ti) = te.get(self.next_idx) {
                if (ti - x) * self.direction > tol {
                    break;
                }
                self.next_idx += 1;

                let mut yi = vec![0.0; y.len()];
                if (ti - x).abs() <= tol {
                    yi.copy_from_slice(y);
                } else if xold == x {
                    // before the initial point
                    continue;
                } else {
                    interpolator.interpolate(ti, &mut yi);
                }
                self.t.push(ti);
                self.y.push(yi);
            }
        }

        // Forward to user callback if any
        if let Some(user) = self.user.as_deref_mut() {
            return user.solout(xold, x, y, interpolator);
        }

        ControlFlag::Continue
    }
}
