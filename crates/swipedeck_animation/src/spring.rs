//! Spring physics
//!
//! A damped harmonic oscillator integrated with RK4. Springs have no fixed
//! duration: they run until displacement and velocity both fall under the
//! rest thresholds, then snap exactly onto the target.

use serde::{Deserialize, Serialize};
use swipedeck_core::{DeckError, Result};

/// Largest integration step in seconds
const MAX_STEP: f32 = 1.0 / 120.0;

/// Spring configuration parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Stiffness (force per unit displacement)
    pub stiffness: f32,
    /// Damping coefficient (force per unit velocity)
    pub damping: f32,
    /// Mass of the simulated body
    pub mass: f32,
    /// Displacement below which the spring may come to rest
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest
    pub rest_velocity: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Self::default()
        }
    }

    /// Fast, no visible bounce
    pub fn stiff() -> Self {
        Self::new(400.0, 40.0, 1.0)
    }

    /// Quick with a small overshoot
    pub fn snappy() -> Self {
        Self::new(300.0, 24.0, 1.0)
    }

    /// Slow and soft
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Pronounced oscillation
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    /// Damping ratio: 1.0 is critically damped, below 1.0 overshoots
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(DeckError::InvalidSpring(format!(
                "stiffness must be positive, got {}",
                self.stiffness
            )));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(DeckError::InvalidSpring(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(DeckError::InvalidSpring(format!(
                "damping must not be negative, got {}",
                self.damping
            )));
        }
        if !(self.rest_displacement > 0.0 && self.rest_velocity > 0.0) {
            return Err(DeckError::InvalidSpring(
                "rest thresholds must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    /// Equivalent of a tension 40 / friction 7 spring: elastic, with overshoot
    fn default() -> Self {
        Self {
            stiffness: 230.0,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.01,
            rest_velocity: 0.01,
        }
    }
}

/// A single-axis spring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring resting at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Create a spring already moving at `velocity`, targeting its own
    /// position until retargeted
    pub fn in_motion(config: SpringConfig, value: f32, velocity: f32) -> Self {
        Self {
            velocity,
            ..Self::new(config, value)
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Retarget the spring, keeping its current velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }


    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_velocity
    }

    /// Advance the simulation by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.rk4(h);
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + k1v * h * 0.5;
        let k2v = self.acceleration(x + k1x * h * 0.5, k2x);

        let k3x = v + k2v * h * 0.5;
        let k3v = self.acceleration(x + k2x * h * 0.5, k3x);

        let k4x = v + k3v * h;
        let k4v = self.acceleration(x + k3x * h, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32) {
        let frames = (seconds * 60.0) as usize;
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn test_spring_converges_and_snaps() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(300.0);
        run(&mut spring, 3.0);

        assert!(spring.is_settled());
        assert_eq!(spring.value(), 300.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_default_spring_overshoots() {
        let mut spring = Spring::new(SpringConfig::default(), 200.0);
        spring.set_target(0.0);

        let mut min_seen = f32::MAX;
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            min_seen = min_seen.min(spring.value());
        }
        assert!(min_seen < 0.0, "elastic return should pass the origin");
        assert!(SpringConfig::default().damping_ratio() < 1.0);
    }

    #[test]
    fn test_settled_spring_does_not_move() {
        let mut spring = Spring::new(SpringConfig::stiff(), 42.0);
        assert!(spring.is_settled());
        spring.step(1.0);
        assert_eq!(spring.value(), 42.0);
    }

    #[test]
    fn test_in_motion_keeps_velocity() {
        let mut spring = Spring::in_motion(SpringConfig::stiff(), 10.0, 500.0);
        assert_eq!(spring.velocity(), 500.0);
        assert_eq!(spring.target(), 10.0);
        assert!(!spring.is_settled());

        spring.step(0.01);
        assert!(spring.value() > 10.0, "coasts forward before being pulled back");
    }

    #[test]
    fn test_presets_are_valid() {
        for config in [
            SpringConfig::default(),
            SpringConfig::stiff(),
            SpringConfig::snappy(),
            SpringConfig::gentle(),
            SpringConfig::wobbly(),
        ] {
            assert!(config.validate().is_ok(), "{config:?}");
        }
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        assert!(SpringConfig::new(0.0, 10.0, 1.0).validate().is_err());
        assert!(SpringConfig::new(100.0, -1.0, 1.0).validate().is_err());
        assert!(SpringConfig::new(100.0, 10.0, 0.0).validate().is_err());
        assert!(SpringConfig::new(f32::NAN, 10.0, 1.0).validate().is_err());
    }
}
