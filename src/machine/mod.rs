//! The stateful machine driven by a transition table.

mod error;

pub use error::MachineError;

use crate::core::{Event, HistoryRecord, State, TransitionTable};
use std::sync::Arc;

/// A state machine driven by a [`TransitionTable`].
///
/// The machine owns the current state and all state changes. Callers only
/// declare what is legal (the table) and what should happen around each
/// change (the hooks); the machine decides whether and how to move.
///
/// # Lifecycle
///
/// A machine moves through three phases: *unstarted* after construction,
/// *running* after a successful [`start`](Self::start), and *stopped* after
/// an explicit [`stop`](Self::stop) or a final transition. A stopped
/// machine rejects `start` and `send` until [`reset`](Self::reset) returns
/// it to the unstarted phase.
///
/// # Concurrency
///
/// All operations take `&mut self` and complete synchronously; there is no
/// internal locking. Lifecycle hooks run on the caller's thread inside
/// [`send`](Self::send) and must not re-enter the same machine (through an
/// `Arc<Mutex<_>>` or similar); that reentrancy is a caller obligation,
/// not something the machine guards against.
pub struct Machine<S: State, E: Event> {
    table: Arc<TransitionTable<S, E>>,
    current: Option<S>,
    initial: Option<S>,
    started: bool,
    done: bool,
    final_event: Option<E>,
    history: Vec<HistoryRecord<S, E>>,
}

impl<S: State, E: Event> Machine<S, E> {
    /// Create an unstarted machine bound to the given table.
    ///
    /// The table is shared read-only for the machine's lifetime; the
    /// constructing scope keeps its own handle for queries.
    pub fn new(table: Arc<TransitionTable<S, E>>) -> Self {
        Self {
            table,
            current: None,
            initial: None,
            started: false,
            done: false,
            final_event: None,
            history: Vec::new(),
        }
    }

    /// Start the machine at the given state.
    ///
    /// Fails with [`MachineError::MissingStates`] if the table is empty,
    /// [`MachineError::StateNotDefined`] if the state is not declared in
    /// the table, [`MachineError::MachineStopped`] if the machine has been
    /// stopped, and [`MachineError::MachineStarted`] if it is already
    /// running. No hooks fire on start.
    pub fn start(&mut self, initial: S) -> Result<(), MachineError<S, E>> {
        if self.table.is_empty() {
            return Err(MachineError::MissingStates);
        }

        if !self.table.has_state(initial) {
            return Err(MachineError::StateNotDefined(initial));
        }

        if self.done {
            return Err(MachineError::MachineStopped {
                final_event: self.final_event,
            });
        }

        if self.started {
            return Err(MachineError::MachineStarted);
        }

        self.current = Some(initial);
        self.initial = Some(initial);
        self.started = true;

        Ok(())
    }

    /// Attempt a state change for the given event.
    ///
    /// Fails with [`MachineError::MachineNotStarted`] before the first
    /// successful `start`, [`MachineError::MachineStopped`] after a stop,
    /// and [`MachineError::MissingTransition`] when the table defines
    /// nothing for the current state and this event.
    ///
    /// Otherwise the matched transition is applied: if its guard passes
    /// (or is absent), the departing state and the event are appended to
    /// the history log, the machine moves to the destination state, the
    /// `on_success` hook fires, and a final transition stops the machine.
    /// If the guard blocks the change, only the `on_fail` hook fires.
    /// Either way `send` returns `Ok(())`; a blocked guard is a successful
    /// no-change outcome, not an error.
    pub fn send(&mut self, event: E) -> Result<(), MachineError<S, E>> {
        if !self.started {
            return Err(MachineError::MachineNotStarted);
        }

        if self.done {
            return Err(MachineError::MachineStopped {
                final_event: self.final_event,
            });
        }

        let Some(current) = self.current else {
            return Err(MachineError::MachineNotStarted);
        };

        // Local handle so the transition borrow does not pin `self`.
        let table = Arc::clone(&self.table);
        let Some(transition) = table.transition(current, event) else {
            return Err(MachineError::MissingTransition {
                state: current,
                event,
            });
        };

        if transition.guard_allows(current, event) {
            self.history.push(HistoryRecord::new(current, event));
            self.current = Some(transition.destination());
            transition.notify_success(current, event);

            if transition.is_final() {
                self.halt();
            }
        } else {
            transition.notify_fail(current, event);
        }

        Ok(())
    }

    /// Stop the machine.
    ///
    /// Idempotent and safe to call at any point, including before `start`.
    /// The most recent event in the history log, if any, is recorded as
    /// the final event and reported by subsequent
    /// [`MachineError::MachineStopped`] errors.
    pub fn stop(&mut self) {
        self.halt();
    }

    /// Return a stopped machine to the unstarted phase.
    ///
    /// Fails with [`MachineError::MachineNotStopped`] while the machine is
    /// running or unstarted. On success the history log and final event
    /// are cleared and the current state is restored to the initial state
    /// recorded at the last `start`; the machine must be started again
    /// before accepting events.
    pub fn reset(&mut self) -> Result<(), MachineError<S, E>> {
        if !self.done {
            return Err(MachineError::MachineNotStopped);
        }

        self.done = false;
        self.final_event = None;
        self.history.clear();
        self.current = self.initial;
        self.started = false;

        Ok(())
    }

    /// The state the machine is currently in.
    ///
    /// `None` until the first successful `start`. After a reset this is
    /// the initial state recorded at the last start, even though the
    /// machine is no longer running.
    pub fn current(&self) -> Option<S> {
        self.current
    }

    /// An independent copy of the history log, in application order.
    ///
    /// Mutating the returned vector never affects the machine's own log.
    pub fn history(&self) -> Vec<HistoryRecord<S, E>> {
        self.history.clone()
    }

    /// Whether the machine has been started and not stopped.
    pub fn is_running(&self) -> bool {
        self.started && !self.done
    }

    /// Whether the machine has stopped.
    pub fn is_stopped(&self) -> bool {
        self.done
    }

    /// The table this machine is bound to.
    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    fn halt(&mut self) {
        if let Some(last) = self.history.last() {
            self.final_event = Some(last.event);
        }

        self.done = true;
    }
}
