//! Classic explicit Runge-Kutta integrators

mod rk4;

pub use rk4::rk4;
