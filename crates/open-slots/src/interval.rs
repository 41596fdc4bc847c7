//! Time intervals used both for busy meetings and for open slots.

use serde::{Deserialize, Serialize};

use crate::timepoint::TimePoint;

/// A closed span of time, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(rename = "startTime")]
    pub start: TimePoint,
    #[serde(rename = "endTime")]
    pub end: TimePoint,
}

impl Interval {
    /// Returns `None` when `end` precedes `start`.
    pub fn new(start: TimePoint, end: TimePoint) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn duration_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }

    /// Two intervals overlap when each starts before the other ends.
    /// Touching endpoints do not count.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}
