//! The day an open-slot computation is bounded by.

use chrono::{Duration, NaiveTime};

use crate::timepoint::TimePoint;

/// First and last second of one UTC calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundary {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl DayBoundary {
    /// The boundary of the UTC date `reference` falls on: `00:00:00` through
    /// `23:59:59`.
    pub fn containing(reference: TimePoint) -> Self {
        let date = reference.date();
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::seconds(24 * 60 * 60 - 1);
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn contains(&self, tp: TimePoint) -> bool {
        self.start <= tp && tp <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_spans_the_reference_date() {
        let day = DayBoundary::containing("2021-03-10T08:55:39+00:00".parse().unwrap());
        assert_eq!(day.start.to_string(), "2021-03-10T00:00:00+00:00");
        assert_eq!(day.end.to_string(), "2021-03-10T23:59:59+00:00");
    }

    #[test]
    fn offset_input_uses_its_utc_date() {
        // 01:30 at +03:00 is still the previous day in UTC.
        let day = DayBoundary::containing("2021-03-10T01:30:00+03:00".parse().unwrap());
        assert_eq!(day.start.to_string(), "2021-03-09T00:00:00+00:00");
    }
}
