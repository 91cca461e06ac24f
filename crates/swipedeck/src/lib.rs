//! swipedeck
//!
//! A stack of swipeable cards. The top card follows horizontal drags; a
//! release past the swipe threshold sends it off-screen on a timed
//! transition and advances to the next card, anything shorter springs it
//! back to rest. Rendering is left to the caller through
//! [`CardRenderer`].
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use swipedeck::{renderer, Deck, DeckConfig};
//! use swipedeck_animation::AnimationScheduler;
//! use swipedeck_core::{GestureEvent, GestureSample};
//!
//! let scheduler = AnimationScheduler::new();
//! let mut deck = Deck::new(["alpha", "beta"], DeckConfig::new(400.0), &scheduler.handle())
//!     .unwrap()
//!     .on_swipe_right(|card| println!("liked {card}"));
//!
//! deck.handle_event(GestureEvent::Start);
//! deck.handle_event(GestureEvent::Move(GestureSample::horizontal(220.0)));
//! deck.handle_event(GestureEvent::Release(GestureSample::horizontal(220.0)));
//!
//! for _ in 0..20 {
//!     scheduler.tick_by(Duration::from_millis(16));
//! }
//! assert_eq!(deck.cursor(), 1);
//!
//! let mut render = renderer(|card: &&str| card.to_uppercase(), || "done".to_string());
//! let composition = deck.compose(&mut render);
//! assert_eq!(composition.active().map(|layer| layer.key), Some("beta"));
//! ```

pub mod bounce;
pub mod compositor;
pub mod config;
pub mod deck;
pub mod gesture;
pub mod rotation;

pub use bounce::Bounce;
pub use compositor::{
    compose_stack, renderer, CardKey, CardLayer, CardRenderer, CardRole, CardStyle, Composition,
    FnRenderer,
};
pub use config::DeckConfig;
pub use deck::{CardPhase, Deck, GestureOutcome};
pub use gesture::{Direction, DragGestureTracker, SwipeDecision};
pub use rotation::RotationInterpolator;
