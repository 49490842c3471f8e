//! Settings for numerical integrators

use std::ops::Index;

use bon::Builder;

use crate::Float;

#[derive(Builder, Clone, Debug)]
/// Settings for the numerical integrators.
///
/// Every field is optional; `None` selects the integrator's default, which
/// should be suitable for most problems.
pub struct Settings {
    /// The rounding unit, typically machine epsilon. Default `2.3e-16`.
    pub uround: Option<Float>,
    /// Safety factor in step-size prediction. Default `0.9`.
    pub safety_factor: Option<Float>,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max.
    /// Default `0.2`.
    pub scale_min: Option<Float>,
    /// Parameter for step size selection where scale_min <= hnew/hold <= scale_max.
    /// Default `10.0`.
    pub scale_max: Option<Float>,
    /// Beta factor for stabilized step size control. Positive values of Beta
    /// ( <= 0.04 ) make the step size control more stable. Default `0.04`.
    pub beta: Option<Float>,
    /// Maximal step size. Default `|xend - x|`.
    pub hmax: Option<Float>,
    /// Initial step size. None will result in an initial guess
    /// provided by the `hinit` heuristic.
    pub h0: Option<Float>,
    /// Maximum number of allowed steps. Default `100_000`.
    pub nmax: Option<usize>,
    /// Number of steps before performing a stiffness test. Default `1000`.
    pub nstiff: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Tolerance enum to allow scalar or vector tolerances
/// using [`Into`] trait for easy conversion from `Float`, `[Float; N]`, or `Vec<Float>`
/// users do not need to know or worry this simply allows both
/// `Float` and `[Float; N]` to be passed in as arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum Tolerance {
    Scalar(Float),
    Vector(Vec<Float>),
}

impl Tolerance {
    /// Number of components for a vector tolerance, `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Tolerance::Scalar(_) => None,
            Tolerance::Vector(vs) => Some(vs.len()),
        }
    }
}

impl From<Float> for Tolerance {
    fn from(val: Float) -> Self {
        Tolerance::Scalar(val)
    }
}

impl From<&[Float]> for Tolerance {
    fn from(val: &[Float]) -> Self {
        Tolerance::Vector(val.to_vec())
    }
}

impl<const N: usize> From<[Float; N]> for Tolerance {
    fn from(val: [Float; N]) -> Self {
        Tolerance::Vector(val.to_vec())
    }
}

impl From<Vec<Float>> for Tolerance {
    fn from(val: Vec<Float>) -> Self {
        Tolerance::Vector(val)
    }
}

impl Index<usize> for Tolerance {
    type Output = Float;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Tolerance::Scalar(v) => v,
            Tolerance::Vector(vs) => &vs[index],
        }
    }
}
