#![allow(dead_code)]

use rumor::prelude::*;

/// Simple harmonic oscillator y'' = -y as a first-order system.
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
        dydx[0] = y[1];
        dydx[1] = -y[0];
    }
}

/// Exponential decay y' = -y.
pub struct Decay;

impl ODE for Decay {
    fn ode(&self, _x: f64, y: &[f64], dydx: &mut [f64]) {
        for i in 0..y.len() {
            dydx[i] = -y[i];
        }
    }
}

/// Tight-tolerance options sampling at `t_eval`.
pub fn sampled_opts(method: Method, t_eval: Vec<f64>) -> IVPOptions {
    IVPOptions::builder()
        .method(method)
        .rtol(1e-10)
        .atol(1e-10)
        .t_eval(t_eval)
        .build()
}

/// Accuracy a method reaches on the smooth test problems with [`sampled_opts`].
pub fn accuracy(method: Method) -> f64 {
    match method {
        Method::DOPRI5 => 1e-8,
        Method::RK4 => 1e-5,
    }
}

/// `true` when consecutive values never grow by more than `slack`.
pub fn non_increasing(values: &[f64], slack: f64) -> bool {
    values.windows(2).all(|w| w[1] <= w[0] + slack)
}

/// `true` when consecutive values never shrink by more than `slack`.
pub fn non_decreasing(values: &[f64], slack: f64) -> bool {
    values.windows(2).all(|w| w[1] >= w[0] - slack)
}
