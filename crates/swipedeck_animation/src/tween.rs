//! Fixed-duration tweens between two 2D values

use crate::easing::Easing;
use swipedeck_core::Vec2;

/// A timed move from `from` to `to`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    duration_ms: u32,
    elapsed_ms: f32,
    easing: Easing,
    finished: bool,
}

impl Tween {
    pub fn new(from: Vec2, to: Vec2, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
            finished: false,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.finished {
            1.0
        } else if self.duration_ms == 0 {
            0.0
        } else {
            (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> Vec2 {
        if self.finished {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    /// Advance the tween by delta time (in milliseconds).
    ///
    /// A zero-length tween finishes on its first advance.
    pub fn advance(&mut self, dt_ms: f32) {
        if self.finished {
            return;
        }

        self.elapsed_ms += dt_ms.max(0.0);

        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.finished = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_tween_tracks_elapsed_time() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(400.0, 0.0), 250, Easing::Linear);

        tween.advance(125.0);
        assert!((tween.value().x - 200.0).abs() < 1e-3);
        assert_eq!(tween.value().y, 0.0);
        assert!(!tween.is_finished());

        tween.advance(124.0);
        assert!(!tween.is_finished());

        tween.advance(1.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), Vec2::new(400.0, 0.0));
    }

    #[test]
    fn test_overshooting_advance_lands_on_target() {
        let mut tween = Tween::new(Vec2::new(10.0, 10.0), Vec2::new(-10.0, 0.0), 100, Easing::EaseIn);
        tween.advance(1_000.0);
        assert_eq!(tween.value(), Vec2::new(-10.0, 0.0));
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_advance() {
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(5.0, 5.0), 0, Easing::Linear);
        assert!(!tween.is_finished());
        assert_eq!(tween.value(), Vec2::ZERO);

        tween.advance(0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), Vec2::new(5.0, 5.0));
    }
}
