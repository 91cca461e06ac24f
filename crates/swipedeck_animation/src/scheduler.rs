//! Animation scheduler
//!
//! Owns every animated track and steps them once per frame. Completion
//! callbacks of timed transitions run after all tracks were stepped and
//! after the scheduler's internal borrow has been released, so they may
//! re-arm animated values.

use crate::spring::Spring;
use crate::tween::Tween;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use swipedeck_core::Vec2;

new_key_type! {
    pub struct AnimationId;
}

/// Callback invoked once a timed transition reaches its target
pub(crate) type Completion = Box<dyn FnOnce()>;

/// Motion currently driving a track
pub(crate) enum Motion {
    Idle,
    Elastic { x: Spring, y: Spring },
    Timed {
        tween: Tween,
        on_complete: Option<Completion>,
    },
}

impl Motion {
    pub(crate) fn is_active(&self) -> bool {
        !matches!(self, Motion::Idle)
    }
}

/// A single animated 2D value
pub(crate) struct Track {
    pub(crate) value: Vec2,
    pub(crate) motion: Motion,
}

impl Track {
    /// Step the track; returns the completion callback if a timed
    /// transition finished during this step.
    fn step(&mut self, dt: Duration) -> Option<Completion> {
        match &mut self.motion {
            Motion::Idle => None,
            Motion::Elastic { x, y } => {
                let secs = dt.as_secs_f32();
                x.step(secs);
                y.step(secs);
                self.value = Vec2::new(x.value(), y.value());
                if x.is_settled() && y.is_settled() {
                    self.value = Vec2::new(x.target(), y.target());
                    self.motion = Motion::Idle;
                }
                None
            }
            Motion::Timed { tween, on_complete } => {
                tween.advance(dt.as_secs_f32() * 1000.0);
                self.value = tween.value();
                if tween.is_finished() {
                    let done = on_complete.take();
                    self.motion = Motion::Idle;
                    done
                } else {
                    None
                }
            }
        }
    }
}

pub(crate) struct SchedulerInner {
    pub(crate) tracks: SlotMap<AnimationId, Track>,
    last_frame: Instant,
}

/// Cheap handle used to register animated values with a scheduler
#[derive(Clone)]
pub struct AnimationHandle {
    pub(crate) inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationHandle {
    /// Register a new resting track
    pub(crate) fn insert(&self, value: Vec2) -> AnimationId {
        self.inner.borrow_mut().tracks.insert(Track {
            value,
            motion: Motion::Idle,
        })
    }

    /// Read a track's value
    pub(crate) fn value(&self, id: AnimationId) -> Option<Vec2> {
        self.inner.borrow().tracks.get(id).map(|track| track.value)
    }

    /// Run `f` against a track; the previous motion it returns is dropped
    /// only after the borrow is released.
    pub(crate) fn with_track<F>(&self, id: AnimationId, f: F)
    where
        F: FnOnce(&mut Track) -> Option<Motion>,
    {
        let replaced = {
            let mut inner = self.inner.borrow_mut();
            inner.tracks.get_mut(id).and_then(f)
        };
        drop(replaced);
    }

    pub(crate) fn is_active(&self, id: AnimationId) -> bool {
        self.inner
            .borrow()
            .tracks
            .get(id)
            .is_some_and(|track| track.motion.is_active())
    }

    pub(crate) fn remove(&self, id: AnimationId) {
        let removed = self.inner.borrow_mut().tracks.remove(id);
        drop(removed);
    }
}

/// The animation scheduler that ticks all active animations
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                tracks: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    pub fn handle(&self) -> AnimationHandle {
        AnimationHandle {
            inner: self.inner.clone(),
        }
    }

    /// Tick all animations by the wall-clock time since the previous tick
    pub fn tick(&self) {
        let now = Instant::now();
        let dt = {
            let mut inner = self.inner.borrow_mut();
            let dt = now - inner.last_frame;
            inner.last_frame = now;
            dt
        };
        self.step(dt);
    }

    /// Tick all animations by an explicit time step
    pub fn tick_by(&self, dt: Duration) {
        self.inner.borrow_mut().last_frame = Instant::now();
        self.step(dt);
    }

    fn step(&self, dt: Duration) {
        let mut finished: SmallVec<[Completion; 2]> = SmallVec::new();
        {
            let mut inner = self.inner.borrow_mut();
            for (_, track) in inner.tracks.iter_mut() {
                if let Some(done) = track.step(dt) {
                    finished.push(done);
                }
            }
        }

        if !finished.is_empty() {
            tracing::trace!(count = finished.len(), "timed transitions completed");
        }
        for done in finished {
            done();
        }
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.inner
            .borrow()
            .tracks
            .iter()
            .any(|(_, track)| track.motion.is_active())
    }

    /// Number of registered animated values
    pub fn track_count(&self) -> usize {
        self.inner.borrow().tracks.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
