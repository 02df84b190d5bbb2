//! Lifecycle errors for the state machine.

use crate::core::{Event, State};
use thiserror::Error;

/// Errors returned by machine lifecycle operations.
///
/// Every variant is a deterministic precondition violation, never a
/// transient fault: retrying the same call on the same machine yields the
/// same error. The machine's state is unchanged whenever an operation
/// fails.
///
/// Note that a guard blocking a transition is *not* an error. `send`
/// reports it only through the transition's `on_fail` hook and returns
/// `Ok(())`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError<S: State, E: Event> {
    /// `start` was called on a machine bound to an empty table.
    #[error("no states defined in the transition table")]
    MissingStates,

    /// `start` was called with a state the table does not declare.
    #[error("start state {0:?} is not defined in the transition table")]
    StateNotDefined(S),

    /// `start` or `send` was called on a stopped machine.
    ///
    /// Carries the event that triggered the final transition, if the
    /// machine had applied any transition before stopping.
    #[error("machine is stopped and not accepting operations")]
    MachineStopped {
        /// Last event recorded in the history log when the machine stopped
        final_event: Option<E>,
    },

    /// `start` was called on a machine that is already running.
    #[error("machine has already been started")]
    MachineStarted,

    /// `send` was called before any successful `start`.
    #[error("machine has not been started")]
    MachineNotStarted,

    /// `send` found no transition for the current state and event.
    #[error("no transition defined for event {event:?} in state {state:?}")]
    MissingTransition {
        /// State the machine was in when the event arrived
        state: S,
        /// The undefined event
        event: E,
    },

    /// `reset` was called on a machine that has not stopped.
    #[error("machine has not been stopped")]
    MachineNotStopped,
}
