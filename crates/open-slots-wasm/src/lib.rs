//! WASM bindings for open-slots.
//!
//! Calendars go in and results come out as JSON strings, so JavaScript sees
//! the same wire contract as the CLI.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p open-slots-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/open-slots-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/open_slots_wasm.wasm
//! ```

use open_slots::SlotOutcome;
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn parse_calendars(json: &str) -> Result<SlotOutcome, String> {
    let data: Value =
        serde_json::from_str(json).map_err(|e| format!("Invalid calendars JSON: {}", e))?;
    Ok(open_slots::compute_open_slots_value(&data))
}

fn open_slots_json(json: &str) -> Result<String, String> {
    let outcome = parse_calendars(json)?;
    serde_json::to_string(&outcome).map_err(|e| format!("Serialization error: {}", e))
}

fn first_open_slot_json(json: &str, min_duration_minutes: i64) -> Result<String, String> {
    let outcome = parse_calendars(json)?;
    serde_json::to_string(&outcome.first_slot_of_at_least(min_duration_minutes))
        .map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the open slots of a day.
///
/// `calendars_json` is a JSON array of `{name?, meetings: [{startTime,
/// endTime, subject?}]}`. Returns either a JSON array of `{startTime,
/// endTime}` objects or one of the JSON-encoded message strings.
#[wasm_bindgen(js_name = "computeOpenSlots")]
pub fn compute_open_slots(calendars_json: &str) -> Result<String, JsValue> {
    open_slots_json(calendars_json).map_err(|e| JsValue::from_str(&e))
}

/// Find the first open slot lasting at least `min_duration_minutes`.
///
/// Returns a JSON `{startTime, endTime}` object, or `null` when no slot is
/// long enough.
#[wasm_bindgen(js_name = "findFirstOpenSlot")]
pub fn find_first_open_slot(
    calendars_json: &str,
    min_duration_minutes: u32,
) -> Result<String, JsValue> {
    first_open_slot_json(calendars_json, i64::from(min_duration_minutes))
        .map_err(|e| JsValue::from_str(&e))
}
