//! JSON in, JSON out.
//!
//! The wire result is either an array of `{startTime, endTime}` objects or
//! one of three fixed message strings. [`SlotOutcome`] serializes to exactly
//! that shape.

use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::calendar::Calendar;
use crate::error::Result;
use crate::slots::{compute_open_slots, SlotOutcome};

pub const VACANT_MESSAGE: &str = "all of the day is vacant.";
pub const FULLY_BOOKED_MESSAGE: &str = "Zero vacancy for this day.";
pub const INVALID_INPUT_MESSAGE: &str = "Data must be an array of calendars";

impl Serialize for SlotOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SlotOutcome::Vacant => serializer.serialize_str(VACANT_MESSAGE),
            SlotOutcome::FullyBooked => serializer.serialize_str(FULLY_BOOKED_MESSAGE),
            SlotOutcome::InvalidInput => serializer.serialize_str(INVALID_INPUT_MESSAGE),
            SlotOutcome::Slots(slots) => slots.serialize(serializer),
        }
    }
}

/// Compute open slots from already-parsed JSON.
///
/// Anything other than an array yields [`SlotOutcome::InvalidInput`]; bad
/// entries inside the array are skipped.
pub fn compute_open_slots_value(data: &Value) -> SlotOutcome {
    let Some(entries) = data.as_array() else {
        warn!("input is not an array of calendars");
        return SlotOutcome::InvalidInput;
    };

    let calendars: Vec<Calendar> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Calendar::from_value_lenient(i, entry))
        .collect();

    compute_open_slots(&calendars)
}

/// Compute open slots from JSON text and return the serialized result.
///
/// # Errors
/// Returns `SlotError::Json` only when `raw` is not JSON. A well-formed
/// document of the wrong shape is a successful result carrying
/// [`INVALID_INPUT_MESSAGE`].
pub fn compute_open_slots_json(raw: &str) -> Result<String> {
    let data: Value = serde_json::from_str(raw)?;
    let outcome = compute_open_slots_value(&data);
    debug!(?outcome, "computed outcome");
    Ok(serde_json::to_string(&outcome)?)
}

/// Like [`compute_open_slots_json`] but pretty-printed.
pub fn compute_open_slots_json_pretty(raw: &str) -> Result<String> {
    let data: Value = serde_json::from_str(raw)?;
    let outcome = compute_open_slots_value(&data);
    Ok(serde_json::to_string_pretty(&outcome)?)
}
