//! Core geometry types
//!
//! Logical-pixel vectors, plus a degree-based angle used for the card
//! rotation visual.

use serde::{Deserialize, Serialize};

/// 2D vector in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A vector with only a horizontal component
    pub const fn horizontal(x: f32) -> Self {
        Self { x, y: 0.0 }
    }

    /// Linear interpolation toward `target` by `fraction` (unclamped)
    pub fn lerp(self, target: Vec2, fraction: f32) -> Vec2 {
        Vec2::new(
            self.x + (target.x - self.x) * fraction,
            self.y + (target.y - self.y) * fraction,
        )
    }
}

/// Rotation angle in degrees (clockwise positive, Z-axis)
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle(pub f32);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub const fn degrees(deg: f32) -> Self {
        Self(deg)
    }

    pub fn as_degrees(&self) -> f32 {
        self.0
    }

    pub fn to_radians(&self) -> f32 {
        self.0.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_midpoint() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(100.0, -10.0);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(50.0, 0.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(Vec2::horizontal(7.0), Vec2::new(7.0, 0.0));
    }

    #[test]
    fn test_angle_radians() {
        let angle = Angle::degrees(180.0);
        assert!((angle.to_radians() - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(Angle::ZERO.as_degrees(), 0.0);
    }
}
