//! Gesture events
//!
//! Drag samples as delivered by the host's pointer system. Offsets are
//! cumulative since the gesture started, in logical pixels.

/// A single drag sample
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSample {
    /// Horizontal offset since gesture start
    pub dx: f32,
    /// Vertical offset since gesture start
    pub dy: f32,
    /// Number of pointers currently touching the surface
    pub active_touches: u8,
}

impl GestureSample {
    pub const fn new(dx: f32, dy: f32, active_touches: u8) -> Self {
        Self {
            dx,
            dy,
            active_touches,
        }
    }

    /// Single-pointer sample with a horizontal offset only
    pub const fn horizontal(dx: f32) -> Self {
        Self {
            dx,
            dy: 0.0,
            active_touches: 1,
        }
    }
}

/// A gesture event forwarded by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A pointer went down on the target; asks who owns the gesture
    Start,
    /// The pointer moved while the gesture is owned
    Move(GestureSample),
    /// The last pointer lifted
    Release(GestureSample),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_sample_is_single_touch() {
        let sample = GestureSample::horizontal(40.0);
        assert_eq!(sample, GestureSample::new(40.0, 0.0, 1));
    }
}
