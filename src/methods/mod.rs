// Numerical methods

mod hinit;

pub mod dp;
pub mod rk;
pub mod settings;
