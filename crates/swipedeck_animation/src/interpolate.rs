//! Clamped piecewise-linear interpolation
//!
//! Maps an input range onto an output range through a list of control
//! points. Inputs outside the first/last control point clamp to the
//! endpoint outputs; there is no extrapolation.

use smallvec::SmallVec;
use swipedeck_core::{DeckError, Result};

/// A piecewise-linear mapping between two ranges
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    input: SmallVec<[f32; 4]>,
    output: SmallVec<[f32; 4]>,
}

impl Interpolation {
    /// Build a mapping from matching input/output control points.
    ///
    /// Inputs must be finite and strictly increasing.
    pub fn new(input: &[f32], output: &[f32]) -> Result<Self> {
        if input.len() < 2 {
            return Err(DeckError::InvalidRange(format!(
                "need at least two control points, got {}",
                input.len()
            )));
        }
        if input.len() != output.len() {
            return Err(DeckError::InvalidRange(format!(
                "input has {} points but output has {}",
                input.len(),
                output.len()
            )));
        }
        if input.iter().chain(output).any(|v| !v.is_finite()) {
            return Err(DeckError::InvalidRange(
                "control points must be finite".to_string(),
            ));
        }
        if input.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(DeckError::InvalidRange(
                "input range must be strictly increasing".to_string(),
            ));
        }

        Ok(Self {
            input: input.iter().copied().collect(),
            output: output.iter().copied().collect(),
        })
    }

    /// Map `x` through the control points
    pub fn map(&self, x: f32) -> f32 {
        let last = self.input.len() - 1;

        if x.is_nan() || x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[last] {
            return self.output[last];
        }

        // First segment whose upper bound reaches x
        let upper = self
            .input
            .iter()
            .position(|&bound| bound >= x)
            .unwrap_or(last);
        let lower = upper - 1;

        let (x0, x1) = (self.input[lower], self.input[upper]);
        let (y0, y1) = (self.output[lower], self.output[upper]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    pub fn input_range(&self) -> (f32, f32) {
        (self.input[0], self.input[self.input.len() - 1])
    }

    pub fn output_range(&self) -> (f32, f32) {
        (self.output[0], self.output[self.output.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symmetric() -> Interpolation {
        Interpolation::new(&[-100.0, 0.0, 100.0], &[-10.0, 0.0, 10.0]).unwrap()
    }

    #[test]
    fn test_maps_control_points_exactly() {
        let interp = symmetric();
        assert_eq!(interp.map(-100.0), -10.0);
        assert_eq!(interp.map(0.0), 0.0);
        assert_eq!(interp.map(100.0), 10.0);
    }

    #[test]
    fn test_interpolates_within_segments() {
        let interp = symmetric();
        assert!((interp.map(50.0) - 5.0).abs() < 1e-5);
        assert!((interp.map(-25.0) + 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_clamps_outside_domain() {
        let interp = symmetric();
        assert_eq!(interp.map(-1.0e9), -10.0);
        assert_eq!(interp.map(1.0e9), 10.0);
        assert_eq!(interp.map(f32::INFINITY), 10.0);
    }

    #[test]
    fn test_uneven_segments() {
        let interp = Interpolation::new(&[0.0, 10.0, 110.0], &[0.0, 1.0, 2.0]).unwrap();
        assert!((interp.map(5.0) - 0.5).abs() < 1e-6);
        assert!((interp.map(60.0) - 1.5).abs() < 1e-6);
        assert_eq!(interp.input_range(), (0.0, 110.0));
        assert_eq!(interp.output_range(), (0.0, 2.0));
    }

    #[test]
    fn test_rejects_malformed_ranges() {
        assert!(Interpolation::new(&[0.0], &[0.0]).is_err());
        assert!(Interpolation::new(&[0.0, 1.0], &[0.0]).is_err());
        assert!(Interpolation::new(&[1.0, 1.0], &[0.0, 1.0]).is_err());
        assert!(Interpolation::new(&[0.0, f32::NAN], &[0.0, 1.0]).is_err());
    }
}
