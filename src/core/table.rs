//! The state transition table.
//!
//! A table maps (state, event) pairs to transition descriptors. It is
//! populated through a builder and immutable afterwards; a machine treats
//! its bound table as shared read-only data.

use super::state::{Event, State};
use super::transition::Transition;
use std::collections::HashMap;

/// Lookup structure mapping (state, event) pairs to transitions.
///
/// The table is nested (state, then event) so that per-state enumeration
/// stays cheap. A state declared with no outgoing events is an absorbing
/// state by construction: the machine can enter it but nothing moves it
/// out.
///
/// Lookup never fails. A missing state or missing event yields "not
/// found", which the machine reports as a missing transition; gaps in the
/// table are not an error in themselves.
///
/// # Example
///
/// ```rust
/// use switchboard::{Transition, TransitionTable};
///
/// let table = TransitionTable::builder()
///     .transition(0u8, 'a', Transition::to(1u8))
///     .transition(1u8, 'b', Transition::to(2u8))
///     .state(2u8)
///     .build();
///
/// assert!(table.transition(0, 'a').is_some());
/// assert!(table.transition(0, 'b').is_none());
/// assert_eq!(table.events_for_state(2), vec![]);
/// assert_eq!(table.states_for_event('b'), vec![1]);
/// ```
pub struct TransitionTable<S: State, E: Event> {
    states: HashMap<S, HashMap<E, Transition<S, E>>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Start building a table.
    pub fn builder() -> TransitionTableBuilder<S, E> {
        TransitionTableBuilder::new()
    }

    /// Look up the transition for a state and event.
    ///
    /// Returns `None` if the state is not in the table or has no
    /// transition for the event.
    pub fn transition(&self, state: S, event: E) -> Option<&Transition<S, E>> {
        self.states.get(&state)?.get(&event)
    }

    /// Every event with a defined transition from the given state.
    ///
    /// Empty if the state is absent or absorbing. Order is unspecified.
    pub fn events_for_state(&self, state: S) -> Vec<E> {
        self.states
            .get(&state)
            .map(|events| events.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Every state from which the given event triggers some transition.
    ///
    /// Scans the whole table. Empty if no state responds to the event.
    /// Order is unspecified.
    pub fn states_for_event(&self, event: E) -> Vec<S> {
        self.states
            .iter()
            .filter(|(_, events)| events.contains_key(&event))
            .map(|(state, _)| *state)
            .collect()
    }

    /// Whether the given state is declared in the table.
    pub fn has_state(&self, state: S) -> bool {
        self.states.contains_key(&state)
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the table declares no states at all.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Builder for [`TransitionTable`].
///
/// Destination states are not declared implicitly: a state that should be
/// reachable as a start state or left absorbing must be added with
/// [`state`](Self::state) or appear as the source of some transition.
/// Declaring the same (state, event) pair twice keeps the last transition.
pub struct TransitionTableBuilder<S: State, E: Event> {
    states: HashMap<S, HashMap<E, Transition<S, E>>>,
}

impl<S: State, E: Event> TransitionTableBuilder<S, E> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Declare a state with no outgoing transitions.
    ///
    /// No-op if the state already exists.
    pub fn state(mut self, state: S) -> Self {
        self.states.entry(state).or_default();
        self
    }

    /// Declare the transition taken when `event` arrives in `from`.
    pub fn transition(mut self, from: S, on: E, transition: Transition<S, E>) -> Self {
        self.states.entry(from).or_default().insert(on, transition);
        self
    }

    /// Finish building the table.
    pub fn build(self) -> TransitionTable<S, E> {
        TransitionTable {
            states: self.states,
        }
    }
}

impl<S: State, E: Event> Default for TransitionTableBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
