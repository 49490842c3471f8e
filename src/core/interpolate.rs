//! Interpolation trait and implementations

use crate::Float;

/// Trait for interpolating the solution within a step.
pub trait Interpolate {
    /// Interpolate the solution at the given abscissa `xi`.
    fn interpolate(&self, xi: Float, yi: &mut [Float]);
}

/// Cubic Hermite interpolant over a single step `[x0, x0 + h]`, built from the
/// states and derivatives at both ends.
///
/// Used by fixed-step methods that carry no higher order dense output.
pub struct CubicHermite<'a> {
    x0: Float,
    h: Float,
    y0: &'a [Float],
    y1: &'a [Float],
    dy0: &'a [Float],
    dy1: &'a [Float],
}

impl<'a> CubicHermite<'a> {
    pub fn new(
        x0: Float,
        h: Float,
        y0: &'a [Float],
        y1: &'a [Float],
        dy0: &'a [Float],
        dy1: &'a [Float],
    ) -> Self {
        Self {
            x0,
            h,
            y0,
            y1,
            dy0,
            dy1,
        }
    }
}

impl Interpolate for CubicHermite<'_> {
    fn interpolate(&self, xi: Float, yi: &mut [Float]) {
        // Degenerate step (initial call): only the left state is known
        if self.h == 0.0 {
            yi.copy_from_slice(self.y0);
            return;
        }

        let t = (xi - self.x0) / self.h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        for i in 0..self.y0.len() {
            yi[i] = h00 * self.y0[i]
                + h10 * self.h * self.dy0[i]
                + h01 * self.y1[i]
                + h11 * self.h * self.dy1[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hermite_is_exact_for_cubics() {
        // y = x^3 on [1, 3]
        let (x0, h) = (1.0, 2.0);
        let y0 = [1.0];
        let y1 = [27.0];
        let dy0 = [3.0];
        let dy1 = [27.0];
        let interp = CubicHermite::new(x0, h, &y0, &y1, &dy0, &dy1);

        let mut yi = [0.0];
        interp.interpolate(2.5, &mut yi);
        assert_relative_eq!(yi[0], 15.625, epsilon = 1e-12);
    }

    #[test]
    fn zero_width_step_returns_left_state() {
        let y0 = [0.3, 0.7];
        let zeros = [0.0, 0.0];
        let interp = CubicHermite::new(4.0, 0.0, &y0, &y0, &zeros, &zeros);

        let mut yi = [0.0, 0.0];
        interp.interpolate(4.0, &mut yi);
        assert_eq!(yi, y0);
    }
}
