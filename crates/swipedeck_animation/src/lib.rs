//! swipedeck Animation System
//!
//! Spring physics, timed tweens, and frame scheduling for animated values.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Timed Tweens**: Fixed-duration moves with easing and a completion callback
//! - **Interpolation**: Clamped piecewise-linear range mapping
//! - **Interruptible**: Starting a transition supersedes the one in flight
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use swipedeck_animation::{AnimatedVec2, AnimationScheduler};
//! use swipedeck_core::Vec2;
//!
//! let scheduler = AnimationScheduler::new();
//! let position = AnimatedVec2::new(&scheduler.handle(), Vec2::ZERO);
//!
//! position.timed_to(Vec2::new(100.0, 0.0), 200, || println!("arrived"));
//! for _ in 0..20 {
//!     scheduler.tick_by(Duration::from_millis(16));
//! }
//! assert_eq!(position.value(), Vec2::new(100.0, 0.0));
//! ```

pub mod animated;
pub mod easing;
pub mod interpolate;
pub mod scheduler;
pub mod spring;
pub mod tween;

pub use animated::AnimatedVec2;
pub use easing::Easing;
pub use interpolate::Interpolation;
pub use scheduler::{AnimationHandle, AnimationId, AnimationScheduler};
pub use spring::{Spring, SpringConfig};
pub use tween::Tween;
