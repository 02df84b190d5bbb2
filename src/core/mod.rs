//! Core transition-table types.
//!
//! This module contains the declarative half of the library:
//! - State and event identifier traits
//! - Guard predicates and lifecycle hooks
//! - Transition descriptors
//! - The transition table itself
//! - History records
//!
//! Everything here is immutable once constructed; the stateful half lives
//! in [`crate::machine`].

mod guard;
mod history;
mod state;
mod table;
mod transition;

pub use guard::{Guard, Hook};
pub use history::HistoryRecord;
pub use state::{Event, State};
pub use table::{TransitionTable, TransitionTableBuilder};
pub use transition::Transition;
