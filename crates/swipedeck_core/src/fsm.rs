//! State Machine Runtime
//!
//! Flat state machines for interaction phases: typed states and events,
//! a fixed transition table, and `send` to step it.

use std::fmt::Debug;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
}

impl<S, E> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: Vec<Transition<S, E>>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Debug,
    E: Copy + Eq + Debug,
{
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Send an event to the state machine.
    ///
    /// Returns the new state, or `None` when no transition matched and the
    /// machine stayed where it was.
    pub fn send(&mut self, event: E) -> Option<S> {
        let current = self.current_state;

        let Some(transition) = self
            .transitions
            .iter()
            .find(|t| t.from_state == current && t.event == event)
        else {
            tracing::trace!(state = ?current, ?event, "no transition");
            return None;
        };

        self.current_state = transition.to_state;
        tracing::trace!(from = ?current, ?event, to = ?self.current_state, "transition");
        Some(self.current_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum State {
        Idle,
        Dragging,
        Settling,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Input {
        Grab,
        Drop,
        Settled,
    }

    fn drag_cycle() -> Vec<Transition<State, Input>> {
        vec![
            Transition::new(State::Idle, Input::Grab, State::Dragging),
            Transition::new(State::Dragging, Input::Drop, State::Settling),
            Transition::new(State::Settling, Input::Settled, State::Idle),
            Transition::new(State::Settling, Input::Grab, State::Dragging),
        ]
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = StateMachine::new(State::Idle, drag_cycle());

        assert_eq!(fsm.current_state(), State::Idle);
        assert_eq!(fsm.send(Input::Grab), Some(State::Dragging));
        assert_eq!(fsm.send(Input::Drop), Some(State::Settling));
        assert_eq!(fsm.send(Input::Settled), Some(State::Idle));
        assert!(fsm.is_in(State::Idle));
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = StateMachine::new(State::Idle, drag_cycle());

        assert_eq!(fsm.send(Input::Drop), None);
        assert_eq!(fsm.send(Input::Settled), None);
        assert_eq!(fsm.current_state(), State::Idle);
    }

    #[test]
    fn test_same_event_from_different_states() {
        let mut fsm = StateMachine::new(State::Idle, drag_cycle());

        fsm.send(Input::Grab);
        fsm.send(Input::Drop);
        assert_eq!(fsm.send(Input::Grab), Some(State::Dragging));
        assert_eq!(fsm.send(Input::Grab), None);
        assert!(fsm.is_in(State::Dragging));
    }
}
