//! Guard predicates and lifecycle hooks for state transitions.
//!
//! Guards are boolean functions that decide whether a transition may
//! execute. Hooks are side-effecting callbacks invoked after the decision:
//! `on_success` when the guard allows the change, `on_fail` when it blocks
//! it. Both receive the state the machine was in and the triggering event,
//! so a single function can serve several transitions.

use super::state::{Event, State};

/// Predicate that determines if a transition can execute.
///
/// A guard is evaluated against the state the machine currently occupies
/// and the event that was sent. Returning `false` blocks the state change;
/// a transition with no guard is always allowed.
///
/// Predicates must be `Send + Sync` so tables can be shared across threads
/// behind an `Arc`. Guards that need mutable captured state should use
/// atomics or another interior-mutability primitive.
///
/// # Example
///
/// ```rust
/// use switchboard::Guard;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// let only_from_low = Guard::new(|s: Level, _e: u8| matches!(s, Level::Low));
///
/// assert!(only_from_low.check(Level::Low, 0));
/// assert!(!only_from_low.check(Level::High, 0));
/// ```
pub struct Guard<S: State, E: Event> {
    predicate: Box<dyn Fn(S, E) -> bool + Send + Sync>,
}

impl<S: State, E: Event> Guard<S, E> {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(S, E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard for the given state and event.
    pub fn check(&self, state: S, event: E) -> bool {
        (self.predicate)(state, event)
    }
}

/// Side-effecting lifecycle callback attached to a transition.
///
/// Hooks run synchronously inside [`crate::Machine::send`] on the caller's
/// thread, after the guard decision and (for `on_success`) after the state
/// change has been applied. They receive the state the machine was leaving
/// and the triggering event.
pub struct Hook<S: State, E: Event> {
    callback: Box<dyn Fn(S, E) + Send + Sync>,
}

impl<S: State, E: Event> Hook<S, E> {
    /// Create a hook from a callback function.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(S, E) + Send + Sync + 'static,
    {
        Hook {
            callback: Box::new(callback),
        }
    }

    /// Invoke the hook for the given state and event.
    pub fn call(&self, state: S, event: E) {
        (self.callback)(state, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Open,
        Closed,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestEvent {
        Knock,
        Push,
    }

    #[test]
    fn guard_sees_state_and_event() {
        let guard = Guard::new(|s: TestState, e: TestEvent| {
            s == TestState::Open && e == TestEvent::Push
        });

        assert!(guard.check(TestState::Open, TestEvent::Push));
        assert!(!guard.check(TestState::Open, TestEvent::Knock));
        assert!(!guard.check(TestState::Closed, TestEvent::Push));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: TestState, _: TestEvent| s == TestState::Open);

        let first = guard.check(TestState::Open, TestEvent::Knock);
        let second = guard.check(TestState::Open, TestEvent::Knock);

        assert_eq!(first, second);
    }

    #[test]
    fn guard_can_read_shared_flags() {
        let countdown = Arc::new(AtomicUsize::new(1));
        let inner = Arc::clone(&countdown);
        let guard = Guard::new(move |_: TestState, _: TestEvent| {
            inner.load(Ordering::SeqCst) == 0
        });

        assert!(!guard.check(TestState::Open, TestEvent::Push));
        countdown.store(0, Ordering::SeqCst);
        assert!(guard.check(TestState::Open, TestEvent::Push));
    }

    #[test]
    fn hook_receives_state_and_event() {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&calls);
        let hook = Hook::new(move |s: TestState, e: TestEvent| {
            assert_eq!(s, TestState::Closed);
            assert_eq!(e, TestEvent::Knock);
            inner.fetch_add(1, Ordering::SeqCst);
        });

        hook.call(TestState::Closed, TestEvent::Knock);
        hook.call(TestState::Closed, TestEvent::Knock);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
