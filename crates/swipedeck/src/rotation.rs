//! Card rotation derived from horizontal drag offset

use crate::config::DeckConfig;
use swipedeck_animation::{AnimatedVec2, Interpolation};
use swipedeck_core::{Angle, Result};

/// Maps the active card's x offset to a tilt angle.
///
/// Control points are `-span ↦ -max`, `0 ↦ 0`, `+span ↦ +max`, where
/// `span` is `rotation_span` viewport widths; offsets beyond the span clamp.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationInterpolator {
    mapping: Interpolation,
}

impl RotationInterpolator {
    pub fn new(config: &DeckConfig) -> Result<Self> {
        let span = config.rotation_span * config.viewport_width;
        let max = config.max_rotation_deg;
        let mapping = Interpolation::new(&[-span, 0.0, span], &[-max, 0.0, max])?;
        Ok(Self { mapping })
    }

    pub fn rotation_for(&self, x: f32) -> Angle {
        Angle::degrees(self.mapping.map(x))
    }

    /// Rotation for the live value of `position`
    pub fn rotation_of(&self, position: &AnimatedVec2) -> Angle {
        Angle::degrees(position.interpolate_x(&self.mapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interpolator(width: f32) -> RotationInterpolator {
        RotationInterpolator::new(&DeckConfig::new(width)).unwrap()
    }

    #[test]
    fn test_control_points() {
        let rotation = interpolator(300.0);
        assert_eq!(rotation.rotation_for(0.0), Angle::ZERO);
        assert_eq!(rotation.rotation_for(600.0), Angle::degrees(120.0));
        assert_eq!(rotation.rotation_for(-600.0), Angle::degrees(-120.0));
        assert!((rotation.rotation_for(300.0).as_degrees() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamps_beyond_span() {
        let rotation = interpolator(300.0);
        assert_eq!(rotation.rotation_for(5_000.0), Angle::degrees(120.0));
        assert_eq!(rotation.rotation_for(-5_000.0), Angle::degrees(-120.0));
    }

    #[test]
    fn test_monotonic_and_bounded() {
        let rotation = interpolator(375.0);
        let mut previous = f32::MIN;
        let mut x = -2_000.0;
        while x <= 2_000.0 {
            let deg = rotation.rotation_for(x).as_degrees();
            assert!(deg >= previous, "rotation decreased at x = {x}");
            assert!(deg.abs() <= 120.0);
            previous = deg;
            x += 12.5;
        }
    }
}
