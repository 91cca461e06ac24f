//! Integration tests for animated values driven by the scheduler
//!
//! These tests verify that:
//! - Completion callbacks can chain a new transition on the same value
//! - Derived projections follow the value mid-transition
//! - Superseded transitions never report completion
//! - Values sharing a scheduler animate independently

use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use swipedeck_animation::{AnimatedVec2, AnimationScheduler, Easing, Interpolation, SpringConfig};
use swipedeck_core::Vec2;

const FRAME: Duration = Duration::from_millis(16);

fn run(scheduler: &AnimationScheduler, frames: usize) {
    for _ in 0..frames {
        scheduler.tick_by(FRAME);
    }
}

/// A timed move whose completion springs the value back home
#[test]
fn test_completion_chains_spring_on_same_value() {
    let scheduler = AnimationScheduler::new();
    let value = Rc::new(AnimatedVec2::new(&scheduler.handle(), Vec2::ZERO));
    let arrived = Rc::new(Cell::new(false));

    let (weak, arrived_clone) = (Rc::downgrade(&value), arrived.clone());
    value.timed_to_eased(Vec2::new(0.0, 120.0), 200, Easing::EaseInOut, move || {
        arrived_clone.set(true);
        if let Some(value) = weak.upgrade() {
            value.spring_to_with(Vec2::ZERO, SpringConfig::snappy());
        }
    });

    run(&scheduler, 6);
    assert!(!arrived.get());
    let partial = value.value().y;
    assert!(partial > 0.0 && partial < 120.0);

    run(&scheduler, 7);
    assert!(arrived.get());
    assert!(value.is_animating(), "return spring should be running");

    run(&scheduler, 180);
    assert!(!value.is_animating());
    assert_eq!(value.value(), Vec2::ZERO);
}

/// Interpolated projections are re-evaluated on every read
#[test]
fn test_projection_follows_timed_move() {
    let scheduler = AnimationScheduler::new();
    let value = AnimatedVec2::new(&scheduler.handle(), Vec2::ZERO);
    let tilt = Interpolation::new(&[-200.0, 0.0, 200.0], &[-30.0, 0.0, 30.0]).unwrap();

    value.timed_to(Vec2::new(400.0, 0.0), 160, || {});
    let mut last = value.interpolate_x(&tilt);
    for _ in 0..12 {
        scheduler.tick_by(FRAME);
        let now = value.interpolate_x(&tilt);
        assert!(now >= last);
        last = now;
    }
    assert_eq!(last, 30.0);
}

/// Retargeting mid-flight drops the first completion
#[test]
fn test_superseded_transition_never_completes() {
    let scheduler = AnimationScheduler::new();
    let value = AnimatedVec2::new(&scheduler.handle(), Vec2::ZERO);
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));

    let first_clone = first.clone();
    value.timed_to(Vec2::new(100.0, 0.0), 100, move || {
        first_clone.set(first_clone.get() + 1)
    });
    run(&scheduler, 3);

    let second_clone = second.clone();
    value.timed_to(Vec2::new(-100.0, 0.0), 100, move || {
        second_clone.set(second_clone.get() + 1)
    });
    run(&scheduler, 20);

    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
    assert_eq!(value.value(), Vec2::new(-100.0, 0.0));
}

/// Values on one scheduler animate independently
#[test]
fn test_independent_tracks() {
    let scheduler = AnimationScheduler::new();
    let handle = scheduler.handle();
    let a = AnimatedVec2::new(&handle, Vec2::ZERO);
    let b = AnimatedVec2::new(&handle, Vec2::new(50.0, 50.0));

    a.timed_to(Vec2::new(10.0, 0.0), 48, || {});
    b.spring_to(Vec2::ZERO);
    assert_eq!(scheduler.track_count(), 2);

    run(&scheduler, 4);
    assert_eq!(a.value(), Vec2::new(10.0, 0.0));
    assert!(b.is_animating());

    drop(b);
    assert_eq!(scheduler.track_count(), 1);
    assert!(!scheduler.has_active_animations());
}
