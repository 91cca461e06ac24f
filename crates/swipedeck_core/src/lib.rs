//! swipedeck core
//!
//! Foundational primitives shared by the animation system and the deck
//! controller:
//!
//! - **Geometry**: `Vec2` and the `Angle` newtype
//! - **Gesture Events**: drag samples delivered by the host pointer system
//! - **State Machines**: a small generic FSM for interaction phases
//! - **Errors**: configuration-time error type
//!
//! # Example
//!
//! ```rust
//! use swipedeck_core::fsm::{StateMachine, Transition};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Phase { Idle, Dragging }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Input { Grab, Drop }
//!
//! let mut fsm = StateMachine::new(
//!     Phase::Idle,
//!     vec![
//!         Transition::new(Phase::Idle, Input::Grab, Phase::Dragging),
//!         Transition::new(Phase::Dragging, Input::Drop, Phase::Idle),
//!     ],
//! );
//!
//! assert_eq!(fsm.send(Input::Grab), Some(Phase::Dragging));
//! assert_eq!(fsm.send(Input::Grab), None);
//! ```

pub mod error;
pub mod events;
pub mod fsm;
pub mod geometry;

pub use error::{DeckError, Result};
pub use events::{GestureEvent, GestureSample};
pub use fsm::{StateMachine, Transition};
pub use geometry::{Angle, Vec2};
