//! Identifier traits for state machine states and events.
//!
//! States and events are opaque, comparable identifiers rather than rich
//! objects. Any type that is cheap to copy and usable as a hash key
//! qualifies; both traits are blanket-implemented.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// A state denotes a point-in-time status of the owning machine. It carries
/// no behavior of its own; all semantics are attached through the
/// transitions declared for it in a [`crate::TransitionTable`].
///
/// Implemented automatically for any `Copy + Eq + Hash + Debug + Send +
/// Sync + 'static` type. Plain `#[derive]`d enums and integer types both
/// qualify.
///
/// # Example
///
/// ```rust
/// use switchboard::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// fn assert_state<S: State>(_: S) {}
/// assert_state(TaskState::Pending);
/// assert_state(42u8); // integers work too
/// ```
pub trait State: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> State for T where T: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

/// Trait for event identifiers.
///
/// An event denotes an input that attempts to trigger a state change.
/// Uniqueness is scoped per state: the same event identifier may appear
/// under many states in a table, each with its own transition.
///
/// Implemented automatically for any `Copy + Eq + Hash + Debug + Send +
/// Sync + 'static` type.
pub trait Event: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Event for T where T: Copy + Eq + Hash + Debug + Send + Sync + 'static {}
