//! Transition descriptors.
//!
//! A transition is the full lifecycle of a state change for one event in
//! one state: an optional guard, the destination state, optional success
//! and failure hooks, and a finality flag.

use super::guard::{Guard, Hook};
use super::state::{Event, State};

/// Describes the single legal response to a (state, event) pair.
///
/// Transitions are plain records built with a fluent consuming API. Only
/// the destination state is required; a transition with no guard is always
/// allowed, and absent hooks are simply skipped.
///
/// # Example
///
/// ```rust
/// use switchboard::Transition;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Closed,
///     Open,
/// }
///
/// let open: Transition<Door, u8> = Transition::to(Door::Open)
///     .when(|s, _e| s == Door::Closed)
///     .on_success(|_s, _e| println!("door opened"))
///     .on_fail(|_s, _e| println!("already open"));
///
/// assert_eq!(open.destination(), Door::Open);
/// assert!(!open.is_final());
/// ```
pub struct Transition<S: State, E: Event> {
    to: S,
    is_final: bool,
    guard: Option<Guard<S, E>>,
    on_success: Option<Hook<S, E>>,
    on_fail: Option<Hook<S, E>>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Create a transition into the given destination state.
    pub fn to(destination: S) -> Self {
        Transition {
            to: destination,
            is_final: false,
            guard: None,
            on_success: None,
            on_fail: None,
        }
    }

    /// Attach a guard predicate from a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(S, E) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Attach a pre-built guard.
    pub fn guard(mut self, guard: Guard<S, E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Attach a hook invoked after the guard allows the state change.
    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: Fn(S, E) + Send + Sync + 'static,
    {
        self.on_success = Some(Hook::new(callback));
        self
    }

    /// Attach a hook invoked when the guard blocks the state change.
    pub fn on_fail<F>(mut self, callback: F) -> Self
    where
        F: Fn(S, E) + Send + Sync + 'static,
    {
        self.on_fail = Some(Hook::new(callback));
        self
    }

    /// Mark the transition as final.
    ///
    /// A machine that successfully applies a final transition stops itself
    /// and accepts no further events until reset.
    pub fn terminal(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// The state this transition moves into on success.
    pub fn destination(&self) -> S {
        self.to
    }

    /// Whether a successful application stops the owning machine.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Evaluate the guard; an absent guard allows the change.
    pub(crate) fn guard_allows(&self, state: S, event: E) -> bool {
        self.guard.as_ref().map_or(true, |g| g.check(state, event))
    }

    pub(crate) fn notify_success(&self, state: S, event: E) {
        if let Some(hook) = &self.on_success {
            hook.call(state, event);
        }
    }

    pub(crate) fn notify_fail(&self, state: S, event: E) {
        if let Some(hook) = &self.on_fail {
            hook.call(state, event);
        }
    }
}
