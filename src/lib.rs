//! Switchboard: a table-driven state machine library.
//!
//! Switchboard inverts control of state-based logic: callers declare states,
//! events, and transitions in a [`TransitionTable`], and a [`Machine`] bound
//! to that table owns the current state, enforces legal transitions, and
//! invokes the lifecycle hooks attached to each transition (`guard`,
//! `on_success`, `on_fail`). Host code never moves the machine imperatively.
//!
//! # Core Concepts
//!
//! - **States and events**: opaque, comparable identifiers (any
//!   `Copy + Eq + Hash + Debug` type such as a plain enum or integer)
//! - **Transitions**: plain records pairing a destination state with
//!   optional guard and callback hooks
//! - **Lifecycle**: a machine must be explicitly started, can be stopped
//!   (explicitly or by a final transition), and reset to run again
//! - **History**: an append-only log of applied transitions, cleared only
//!   by `reset`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use switchboard::{Machine, Transition, TransitionTable};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Phase {
//!     Draft,
//!     Review,
//!     Published,
//! }
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Action {
//!     Submit,
//!     Approve,
//! }
//!
//! let table = TransitionTable::builder()
//!     .transition(Phase::Draft, Action::Submit, Transition::to(Phase::Review))
//!     .transition(
//!         Phase::Review,
//!         Action::Approve,
//!         Transition::to(Phase::Published).terminal(),
//!     )
//!     .state(Phase::Published)
//!     .build();
//!
//! let mut machine = Machine::new(Arc::new(table));
//! machine.start(Phase::Draft).unwrap();
//! machine.send(Action::Submit).unwrap();
//! assert_eq!(machine.current(), Some(Phase::Review));
//!
//! machine.send(Action::Approve).unwrap();
//! assert_eq!(machine.current(), Some(Phase::Published));
//! assert!(machine.is_stopped());
//! ```

pub mod core;
pub mod machine;
mod macros;

// Re-export commonly used types
pub use crate::core::{
    Event, Guard, HistoryRecord, Hook, State, Transition, TransitionTable, TransitionTableBuilder,
};
pub use crate::machine::{Machine, MachineError};
