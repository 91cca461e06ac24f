//! Drag gesture tracking and release classification
//!
//! Only horizontal motion is tracked: the live offset follows `dx` and the
//! vertical component is held at zero. A release is classified purely by
//! its horizontal offset against the swipe threshold; the touch count is
//! not consulted, so a second finger does not change the outcome.

use swipedeck_animation::AnimatedVec2;
use swipedeck_core::{GestureSample, Vec2};

/// Direction of a committed swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Unit sign along the x axis
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Outcome of a released drag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDecision {
    SwipeLeft,
    SwipeRight,
    Abort,
}

impl SwipeDecision {
    pub fn direction(self) -> Option<Direction> {
        match self {
            SwipeDecision::SwipeLeft => Some(Direction::Left),
            SwipeDecision::SwipeRight => Some(Direction::Right),
            SwipeDecision::Abort => None,
        }
    }

    pub fn is_commit(self) -> bool {
        self != SwipeDecision::Abort
    }
}

/// Tracks the drag on the active card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGestureTracker {
    threshold: f32,
    tracking: bool,
}

impl DragGestureTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            tracking: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Claim the gesture. The active card is the only draggable element,
    /// so the claim always succeeds.
    pub fn on_gesture_start(&mut self) -> bool {
        self.tracking = true;
        true
    }

    /// Follow the pointer horizontally
    pub fn on_gesture_move(&self, sample: &GestureSample, position: &AnimatedVec2) {
        if self.tracking {
            position.set_value(Vec2::horizontal(sample.dx));
        }
    }

    /// Stop tracking and classify the release
    pub fn on_gesture_release(&mut self, sample: &GestureSample) -> SwipeDecision {
        self.tracking = false;
        self.classify(sample.dx)
    }

    /// Strict comparison: an offset exactly at the threshold aborts
    pub fn classify(&self, dx: f32) -> SwipeDecision {
        if dx > self.threshold {
            SwipeDecision::SwipeRight
        } else if dx < -self.threshold {
            SwipeDecision::SwipeLeft
        } else {
            SwipeDecision::Abort
        }
    }
}
