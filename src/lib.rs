//! Ignorant/Spreader/Stifler rumor-spreading model and the explicit Runge-Kutta
//! initial value problem solvers used to integrate it.
//!
//! The quickest way in is [`rumor::simulate`]:
//!
//! ```rust
//! use rumor::prelude::*;
//!
//! let trajectory = simulate(0.5, 0.1, 0.99, 0.01, 0.0, 30.0).unwrap();
//! assert_eq!(trajectory.len(), 300);
//! ```

pub mod core;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod rumor;
pub mod solve;

pub use error::Error;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

#[cfg(not(any(feature = "f32", feature = "f64")))]
compile_error!("one of the features 'f32' or 'f64' must be enabled");

/// Floating point type used throughout the crate.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
