//! Task identifiers and their timestamp-derived generator.

use super::ParseTaskIdError;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a task within the collection.
///
/// Identifiers are milliseconds since the Unix epoch at creation time,
/// serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the display element identifier for this task (`todo-{id}`).
    #[must_use]
    pub fn element_id(self) -> String {
        format!("todo-{}", self.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseTaskIdError(value.to_owned()))
    }
}

/// Issues strictly increasing task identifiers from wall-clock time.
///
/// The clock supplies milliseconds since the epoch. When the clock has not
/// moved past the last issued identifier (two creates in the same
/// millisecond, or a clock stepping backwards) the generator issues
/// `last + 1` instead, so identifiers never repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskIdGenerator {
    last: Option<TaskId>,
}

impl TaskIdGenerator {
    /// Creates a generator that has issued nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records an identifier issued elsewhere, such as one loaded from
    /// storage, so it is never issued again.
    pub fn observe(&mut self, id: TaskId) {
        if self.last.is_none_or(|last| id > last) {
            self.last = Some(id);
        }
    }

    /// Returns the last identifier issued or observed.
    #[must_use]
    pub const fn last(&self) -> Option<TaskId> {
        self.last
    }

    /// Issues the next identifier.
    pub fn next_id(&mut self, clock: &impl Clock) -> TaskId {
        let now = u64::try_from(clock.utc().timestamp_millis()).unwrap_or_default();
        let candidate = match self.last {
            Some(last) if now <= last.value() => last.value().saturating_add(1),
            _ => now,
        };
        let id = TaskId(candidate);
        self.last = Some(id);
        id
    }
}
