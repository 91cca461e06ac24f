//! Deck controller
//!
//! Owns the cursor into the card sequence and the phase of the active card:
//!
//! ```text
//!            Grab              Abort (elastic return)
//!   Idle ──────────▶ Dragging ─────────────────────▶ Reverting
//!    ▲                  │                               │  │
//!    │                  │ Commit (timed exit)    Settled│  │Grab
//!    │                  ▼                               │  │
//!    └───────────── Exiting ◀─── (next card) ───────────┘  └──▶ Dragging
//!       Completed
//! ```
//!
//! When the exit animation completes, the direction callback is invoked
//! with the card under the cursor, the position is reset to the origin,
//! and only then does the cursor advance. The cursor never decreases.
//!
//! Callbacks may read the deck (`cursor`, `phase`, `compose`, ...) and see
//! it as it was before the swipe was applied.

use crate::compositor::{compose_stack, CardKey, CardRenderer, CardStyle, Composition};
use crate::config::DeckConfig;
use crate::gesture::{Direction, DragGestureTracker, SwipeDecision};
use crate::rotation::RotationInterpolator;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use swipedeck_animation::{AnimatedVec2, AnimationHandle};
use swipedeck_core::fsm::{StateMachine, Transition};
use swipedeck_core::{Angle, GestureEvent, GestureSample, Result, Vec2};

/// Phase of the active card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardPhase {
    /// At rest, waiting for a gesture
    Idle,
    /// Following the pointer
    Dragging,
    /// Springing back to the origin after an abandoned drag
    Reverting,
    /// Leaving the screen after a committed swipe
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum PhaseEvent {
    Grab,
    Abort,
    Commit,
    Settled,
    Completed,
}

/// What the deck did with a gesture event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The deck claimed the gesture
    Claimed,
    /// The live offset was updated
    Tracked,
    /// The drag was released and classified
    Released(SwipeDecision),
    /// No card can take the event right now
    Ignored,
}

type SwipeCallback<T> = Box<dyn FnMut(&T)>;

struct DeckState<T> {
    cards: Vec<T>,
    cursor: usize,
    phase: StateMachine<CardPhase, PhaseEvent>,
}

struct SwipeCallbacks<T> {
    left: SwipeCallback<T>,
    right: SwipeCallback<T>,
}

impl<T> DeckState<T> {
    fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }
}

fn phase_machine() -> StateMachine<CardPhase, PhaseEvent> {
    use CardPhase::*;
    use PhaseEvent::*;

    StateMachine::new(
        Idle,
        vec![
            Transition::new(Idle, Grab, Dragging),
            Transition::new(Reverting, Grab, Dragging),
            Transition::new(Dragging, Abort, Reverting),
            Transition::new(Dragging, Commit, Exiting),
            Transition::new(Reverting, Settled, Idle),
            Transition::new(Exiting, Completed, Idle),
        ],
    )
}

/// A stack of swipeable cards
pub struct Deck<T> {
    state: Rc<RefCell<DeckState<T>>>,
    callbacks: Rc<RefCell<SwipeCallbacks<T>>>,
    position: Rc<AnimatedVec2>,
    tracker: DragGestureTracker,
    rotation: RotationInterpolator,
    config: DeckConfig,
}

impl<T: CardKey + 'static> Deck<T> {
    /// Mount a deck over `cards` with the cursor at the first card
    pub fn new<I>(cards: I, config: DeckConfig, animations: &AnimationHandle) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        config.validate()?;
        let rotation = RotationInterpolator::new(&config)?;
        let cards: Vec<T> = cards.into_iter().collect();

        tracing::debug!(
            cards = cards.len(),
            viewport_width = config.viewport_width,
            threshold = config.swipe_threshold(),
            "deck mounted"
        );

        Ok(Self {
            state: Rc::new(RefCell::new(DeckState {
                cards,
                cursor: 0,
                phase: phase_machine(),
            })),
            callbacks: Rc::new(RefCell::new(SwipeCallbacks {
                left: Box::new(|_| {}),
                right: Box::new(|_| {}),
            })),
            position: Rc::new(AnimatedVec2::new(animations, Vec2::ZERO)),
            tracker: DragGestureTracker::new(config.swipe_threshold()),
            rotation,
            config,
        })
    }

    /// Called with the card once it has been swiped off to the left
    pub fn on_swipe_left<F: FnMut(&T) + 'static>(self, callback: F) -> Self {
        self.callbacks.borrow_mut().left = Box::new(callback);
        self
    }

    /// Called with the card once it has been swiped off to the right
    pub fn on_swipe_right<F: FnMut(&T) + 'static>(self, callback: F) -> Self {
        self.callbacks.borrow_mut().right = Box::new(callback);
        self
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Index of the next card to be swiped
    pub fn cursor(&self) -> usize {
        self.state.borrow().cursor
    }

    pub fn len(&self) -> usize {
        self.state.borrow().cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.borrow().is_exhausted()
    }

    /// Key of the card under the cursor
    pub fn active_key(&self) -> Option<T::Key> {
        let state = self.state.borrow();
        state.cards.get(state.cursor).map(CardKey::key)
    }

    /// Append cards to the end of the sequence
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, cards: I) {
        let mut state = self.state.borrow_mut();
        let was_exhausted = state.is_exhausted();
        state.cards.extend(cards);
        if was_exhausted && !state.is_exhausted() {
            tracing::debug!(cursor = state.cursor, "deck refilled");
        }
    }

    /// Phase of the active card
    pub fn phase(&self) -> CardPhase {
        self.sync_phase();
        self.state.borrow().phase.current_state()
    }

    /// Live offset of the active card
    pub fn position(&self) -> Vec2 {
        self.position.value()
    }

    /// Live rotation of the active card
    pub fn rotation(&self) -> Angle {
        self.rotation.rotation_of(&self.position)
    }

    /// Style for the active card, or `None` once the deck is exhausted
    pub fn active_style(&self) -> Option<CardStyle> {
        if self.is_exhausted() {
            return None;
        }
        Some(CardStyle {
            offset: self.position(),
            rotation: self.rotation(),
        })
    }

    /// Forward a host gesture event
    pub fn handle_event(&mut self, event: GestureEvent) -> GestureOutcome {
        match event {
            GestureEvent::Start => {
                if self.on_gesture_start() {
                    GestureOutcome::Claimed
                } else {
                    GestureOutcome::Ignored
                }
            }
            GestureEvent::Move(sample) => {
                if self.on_gesture_move(&sample) {
                    GestureOutcome::Tracked
                } else {
                    GestureOutcome::Ignored
                }
            }
            GestureEvent::Release(sample) => match self.on_gesture_release(&sample) {
                Some(decision) => GestureOutcome::Released(decision),
                None => GestureOutcome::Ignored,
            },
        }
    }

    /// A pointer went down on the active card. Returns whether the deck
    /// took ownership of the gesture.
    pub fn on_gesture_start(&mut self) -> bool {
        self.sync_phase();
        let mut state = self.state.borrow_mut();
        if state.is_exhausted() {
            tracing::trace!("gesture start ignored: deck exhausted");
            return false;
        }
        if state.phase.send(PhaseEvent::Grab).is_none() {
            tracing::trace!(phase = ?state.phase.current_state(), "gesture start ignored");
            return false;
        }
        // Hold a returning card where the new touch caught it
        self.position.set_value(self.position.value());
        self.tracker.on_gesture_start()
    }

    /// The pointer moved. Returns whether the offset was applied.
    pub fn on_gesture_move(&mut self, sample: &GestureSample) -> bool {
        if !self.is_dragging() {
            tracing::trace!(dx = sample.dx, "gesture move ignored");
            return false;
        }
        self.tracker.on_gesture_move(sample, &self.position);
        true
    }

    /// The pointer lifted. Classifies the release and starts the exit or
    /// return transition; `None` if no drag was in progress.
    pub fn on_gesture_release(&mut self, sample: &GestureSample) -> Option<SwipeDecision> {
        if !self.is_dragging() {
            tracing::trace!(dx = sample.dx, "gesture release ignored");
            return None;
        }

        let decision = self.tracker.on_gesture_release(sample);
        match decision.direction() {
            Some(direction) => self.force_swipe(direction),
            None => self.reset_position(sample.dx),
        }
        Some(decision)
    }

    /// Render the stack with `renderer`
    pub fn compose<R>(&self, renderer: &mut R) -> Composition<T::Key, R::Visual>
    where
        R: CardRenderer<T>,
    {
        self.sync_phase();
        let style = CardStyle {
            offset: self.position(),
            rotation: self.rotation(),
        };
        let state = self.state.borrow();
        compose_stack(&state.cards, state.cursor, style, renderer)
    }

    fn is_dragging(&self) -> bool {
        self.state.borrow().phase.is_in(CardPhase::Dragging)
    }

    /// Move a settled return spring back to `Idle`
    fn sync_phase(&self) {
        let settled = self.state.borrow().phase.is_in(CardPhase::Reverting)
            && !self.position.is_animating();
        if settled {
            self.state.borrow_mut().phase.send(PhaseEvent::Settled);
        }
    }

    fn reset_position(&mut self, dx: f32) {
        self.state.borrow_mut().phase.send(PhaseEvent::Abort);
        tracing::debug!(dx, threshold = self.tracker.threshold(), "swipe aborted");
        self.position
            .spring_to_with(Vec2::ZERO, self.config.reset_spring);
    }

    fn force_swipe(&mut self, direction: Direction) {
        self.state.borrow_mut().phase.send(PhaseEvent::Commit);
        tracing::debug!(?direction, "swipe committed");

        let target = Vec2::horizontal(direction.sign() * self.config.exit_distance());
        let state = Rc::downgrade(&self.state);
        let callbacks = Rc::downgrade(&self.callbacks);
        let position = Rc::downgrade(&self.position);
        self.position.timed_to_eased(
            target,
            self.config.exit_duration_ms,
            self.config.exit_easing,
            move || on_swipe_complete(&state, &callbacks, &position, direction),
        );
    }
}

/// Runs when the exit animation of the active card has finished
fn on_swipe_complete<T>(
    state: &Weak<RefCell<DeckState<T>>>,
    callbacks: &Weak<RefCell<SwipeCallbacks<T>>>,
    position: &Weak<AnimatedVec2>,
    direction: Direction,
) {
    let (Some(state), Some(callbacks), Some(position)) =
        (state.upgrade(), callbacks.upgrade(), position.upgrade())
    else {
        return;
    };

    {
        let deck = state.borrow();
        match deck.cards.get(deck.cursor) {
            Some(item) => {
                let mut callbacks = callbacks.borrow_mut();
                match direction {
                    Direction::Right => (callbacks.right)(item),
                    Direction::Left => (callbacks.left)(item),
                }
            }
            None => {
                tracing::warn!(cursor = deck.cursor, "exit completed with no card under the cursor");
            }
        }
    }

    position.set_value(Vec2::ZERO);

    let mut deck = state.borrow_mut();
    deck.cursor += 1;
    deck.phase.send(PhaseEvent::Completed);

    if deck.is_exhausted() {
        tracing::info!(swiped = deck.cursor, "deck exhausted");
    } else {
        tracing::debug!(cursor = deck.cursor, "next card active");
    }
}
