//! History records for applied transitions.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one applied state change.
///
/// `state` is the state the machine was leaving when the transition fired,
/// and `event` is the trigger. A machine appends one record per
/// guard-passing transition, in application order, and clears the log only
/// on reset.
///
/// Records are serializable so hosts can export the log for auditing or
/// replay.
///
/// # Example
///
/// ```rust
/// use switchboard::HistoryRecord;
///
/// let record = HistoryRecord::new(0u8, 'a');
/// assert_eq!(record.state, 0);
/// assert_eq!(record.event, 'a');
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HistoryRecord<S: State, E: Event> {
    /// State the machine transitioned out of
    pub state: S,
    /// Event that triggered the state change
    pub event: E,
    /// When the transition was applied
    pub at: DateTime<Utc>,
}

impl<S: State, E: Event> HistoryRecord<S, E> {
    /// Create a record stamped with the current time.
    pub fn new(state: S, event: E) -> Self {
        Self {
            state,
            event,
            at: Utc::now(),
        }
    }
}
