//! Bounce demo element
//!
//! A single element that springs from the origin to a fixed point once,
//! when mounted.

use swipedeck_animation::{AnimatedVec2, AnimationHandle, SpringConfig};
use swipedeck_core::Vec2;

/// Where the bounce lands unless told otherwise
pub const DEFAULT_BOUNCE_TARGET: Vec2 = Vec2::new(200.0, 500.0);

pub struct Bounce {
    position: AnimatedVec2,
    target: Vec2,
    spring: SpringConfig,
    mounted: bool,
}

impl Bounce {
    pub fn new(animations: &AnimationHandle) -> Self {
        Self::with_target(animations, DEFAULT_BOUNCE_TARGET)
    }

    pub fn with_target(animations: &AnimationHandle, target: Vec2) -> Self {
        Self {
            position: AnimatedVec2::new(animations, Vec2::ZERO),
            target,
            spring: SpringConfig::default(),
            mounted: false,
        }
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Start the move. Mounting twice does not restart it.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::debug!(to = ?self.target, "bounce started");
        self.position.spring_to_with(self.target, self.spring);
    }

    /// Current left/top offset
    pub fn layout(&self) -> Vec2 {
        self.position.value()
    }

    pub fn is_settled(&self) -> bool {
        self.mounted && !self.position.is_animating()
    }
}
