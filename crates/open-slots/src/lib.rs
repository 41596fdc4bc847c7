//! # open-slots
//!
//! Find the free time in a day shared by several calendars.
//!
//! Every meeting from every calendar is treated as anonymous busy time.
//! Overlapping, nested and back-to-back meetings merge into single busy
//! blocks, and the gaps between them, bounded by the UTC date of the
//! earliest meeting, are returned as open slots.
//!
//! ```rust
//! use open_slots::compute_open_slots_json;
//!
//! let json = r#"[{"name":"Ann","meetings":[
//!     {"startTime":"2021-03-10T09:00:00+00:00","endTime":"2021-03-10T17:00:00+00:00"}
//! ]}]"#;
//! let out = compute_open_slots_json(json).unwrap();
//! assert_eq!(
//!     out,
//!     r#"[{"startTime":"2021-03-10T00:00:00+00:00","endTime":"2021-03-10T09:00:00+00:00"},{"startTime":"2021-03-10T17:00:00+00:00","endTime":"2021-03-10T23:59:59+00:00"}]"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`timepoint`] — canonical second-precision UTC instants
//! - [`interval`] — busy and free spans
//! - [`calendar`] — calendars, meetings and lenient JSON decoding
//! - [`day`] — the day boundary
//! - [`slots`] — the sweep and its [`SlotOutcome`]
//! - [`wire`] — JSON entry points and result serialization
//! - [`example`] — a bundled sample day
//! - [`error`] — Error types

pub mod calendar;
pub mod day;
pub mod error;
pub mod example;
pub mod interval;
pub mod slots;
pub mod timepoint;
pub mod wire;

pub use calendar::{Calendar, Meeting};
pub use day::DayBoundary;
pub use error::SlotError;
pub use interval::Interval;
pub use slots::{compute_open_slots, SlotOutcome};
pub use timepoint::TimePoint;
pub use wire::{compute_open_slots_json, compute_open_slots_json_pretty, compute_open_slots_value};
