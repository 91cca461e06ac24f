//! Animated 2D values
//!
//! `AnimatedVec2` is a fine-grained mutable position registered with an
//! [`AnimationScheduler`](crate::AnimationScheduler). It can be overwritten
//! directly, settled elastically with a spring, or moved over a fixed
//! duration with a completion callback. Starting any transition supersedes
//! the one in flight; a superseded timed transition never fires its
//! completion.

use crate::easing::Easing;
use crate::interpolate::Interpolation;
use crate::scheduler::{AnimationHandle, AnimationId, Motion};
use crate::spring::{Spring, SpringConfig};
use crate::tween::Tween;
use swipedeck_core::Vec2;

/// A 2D value animated by the scheduler it was registered with
pub struct AnimatedVec2 {
    handle: AnimationHandle,
    id: AnimationId,
}

impl AnimatedVec2 {
    pub fn new(handle: &AnimationHandle, initial: Vec2) -> Self {
        let id = handle.insert(initial);
        Self {
            handle: handle.clone(),
            id,
        }
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    /// The live value, including mid-transition
    pub fn value(&self) -> Vec2 {
        self.handle.value(self.id).unwrap_or_default()
    }

    /// Whether a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.handle.is_active(self.id)
    }

    /// Overwrite the value immediately, cancelling any transition
    pub fn set_value(&self, value: Vec2) {
        self.handle.with_track(self.id, |track| {
            track.value = value;
            Some(std::mem::replace(&mut track.motion, Motion::Idle))
        });
    }

    /// Overwrite only the horizontal component, cancelling any transition
    pub fn set_x(&self, x: f32) {
        self.handle.with_track(self.id, |track| {
            track.value.x = x;
            Some(std::mem::replace(&mut track.motion, Motion::Idle))
        });
    }

    /// Settle toward `target` with the default spring
    pub fn spring_to(&self, target: Vec2) {
        self.spring_to_with(target, SpringConfig::default());
    }

    /// Settle toward `target` with `config`.
    ///
    /// A value already moving under a spring keeps its velocity; the new
    /// `config` takes over from the next tick.
    pub fn spring_to_with(&self, target: Vec2, config: SpringConfig) {
        self.handle.with_track(self.id, |track| {
            let (mut x, mut y) = match &track.motion {
                Motion::Elastic { x, y } => (
                    Spring::in_motion(config, x.value(), x.velocity()),
                    Spring::in_motion(config, y.value(), y.velocity()),
                ),
                _ => (
                    Spring::new(config, track.value.x),
                    Spring::new(config, track.value.y),
                ),
            };
            x.set_target(target.x);
            y.set_target(target.y);
            Some(std::mem::replace(&mut track.motion, Motion::Elastic { x, y }))
        });
    }

    /// Move linearly to `target` over `duration_ms`, then call `on_complete`
    pub fn timed_to<F>(&self, target: Vec2, duration_ms: u32, on_complete: F)
    where
        F: FnOnce() + 'static,
    {
        self.timed_to_eased(target, duration_ms, Easing::Linear, on_complete);
    }

    /// Move to `target` over `duration_ms` with `easing`, then call
    /// `on_complete` exactly once after the value has reached `target`
    pub fn timed_to_eased<F>(&self, target: Vec2, duration_ms: u32, easing: Easing, on_complete: F)
    where
        F: FnOnce() + 'static,
    {
        self.handle.with_track(self.id, |track| {
            let tween = Tween::new(track.value, target, duration_ms, easing);
            Some(std::mem::replace(
                &mut track.motion,
                Motion::Timed {
                    tween,
                    on_complete: Some(Box::new(on_complete)),
                },
            ))
        });
    }

    /// Project the horizontal component through `mapping`; evaluated on
    /// every call
    pub fn interpolate_x(&self, mapping: &Interpolation) -> f32 {
        mapping.map(self.value().x)
    }
}

impl Drop for AnimatedVec2 {
    fn drop(&mut self) {
        self.handle.remove(self.id);
    }
}

impl std::fmt::Debug for AnimatedVec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedVec2")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("animating", &self.is_animating())
            .finish()
    }
}
