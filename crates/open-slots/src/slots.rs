//! Compute the open slots of a day from any number of calendars.
//!
//! Meetings from every calendar are flattened into one anonymous busy list,
//! sorted by start, and swept once. Overlapping, nested and back-to-back
//! meetings collapse into a single busy block; each gap between blocks
//! becomes an open slot. The day is bounded by the UTC date of the
//! earliest-starting meeting.
//!
//! Only that one date is considered. Meetings on later dates still feed the
//! sweep, so multi-day input produces slots outside the boundary; such input
//! is unsupported.

use tracing::debug;

use crate::calendar::Calendar;
use crate::day::DayBoundary;
use crate::interval::Interval;

/// Result of an open-slot computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    /// No meetings at all.
    Vacant,
    /// Meetings exist and leave no gap in the day.
    FullyBooked,
    /// Open slots in ascending order, pairwise non-overlapping.
    Slots(Vec<Interval>),
    /// The input was not a list of calendars.
    InvalidInput,
}

impl SlotOutcome {
    /// The open slots, empty for every sentinel outcome.
    pub fn slots(&self) -> &[Interval] {
        match self {
            SlotOutcome::Slots(slots) => slots,
            _ => &[],
        }
    }

    pub fn is_vacant(&self) -> bool {
        matches!(self, SlotOutcome::Vacant)
    }

    pub fn is_fully_booked(&self) -> bool {
        matches!(self, SlotOutcome::FullyBooked)
    }

    /// First open slot lasting at least `min_duration_minutes`.
    pub fn first_slot_of_at_least(&self, min_duration_minutes: i64) -> Option<&Interval> {
        self.slots()
            .iter()
            .find(|slot| slot.duration_minutes() >= min_duration_minutes)
    }
}

/// Compute the open slots left by the meetings of all `calendars`.
///
/// Meetings whose end precedes their start are ignored.
pub fn compute_open_slots(calendars: &[Calendar]) -> SlotOutcome {
    let busy: Vec<Interval> = calendars
        .iter()
        .flat_map(|cal| cal.meetings.iter())
        .filter_map(|m| m.interval())
        .collect();

    debug!(
        calendars = calendars.len(),
        meetings = busy.len(),
        "flattened meetings"
    );

    open_slots_for(busy)
}

/// Sweep an owned, unsorted busy list.
fn open_slots_for(mut busy: Vec<Interval>) -> SlotOutcome {
    if busy.is_empty() {
        return SlotOutcome::Vacant;
    }

    // Stable: equal starts keep their input order.
    busy.sort_by_key(|iv| iv.start);

    let day = DayBoundary::containing(busy[0].start);
    debug!(day_start = %day.start, day_end = %day.end, "derived day boundary");

    let mut slots = Vec::new();
    let mut pointer = day.start;
    let mut latest_end = day.start;

    for meeting in &busy {
        if meeting.start > pointer {
            slots.push(Interval {
                start: pointer,
                end: meeting.start,
            });
            pointer = meeting.end;
        } else {
            // Overlapping or adjacent; never move the pointer backwards.
            pointer = pointer.max(meeting.end);
        }
        latest_end = latest_end.max(meeting.end);
    }

    if latest_end < day.end {
        slots.push(Interval {
            start: latest_end,
            end: day.end,
        });
    }

    debug!(slots = slots.len(), "sweep finished");

    if slots.is_empty() {
        SlotOutcome::FullyBooked
    } else {
        SlotOutcome::Slots(slots)
    }
}
