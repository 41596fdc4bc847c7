//! Calendars and meetings, plus lenient decoding from untyped JSON.
//!
//! Decoding never fails on a bad sub-part: calendars without a usable
//! `meetings` array and meetings without usable timestamps are dropped and
//! logged, so one broken entry cannot sink the whole day.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::interval::Interval;
use crate::timepoint::TimePoint;

/// A single busy period on someone's calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(rename = "startTime")]
    pub start: TimePoint,
    #[serde(rename = "endTime")]
    pub end: TimePoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Meeting {
    pub fn new(start: TimePoint, end: TimePoint) -> Self {
        Self {
            start,
            end,
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// The busy interval, or `None` if the meeting ends before it starts.
    pub fn interval(&self) -> Option<Interval> {
        Interval::new(self.start, self.end)
    }
}

/// An owner and their meetings. Meeting order is not significant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

impl Calendar {
    pub fn new(name: impl Into<String>, meetings: Vec<Meeting>) -> Self {
        Self {
            name: Some(name.into()),
            meetings,
        }
    }

    /// Decode one calendar entry, keeping only the meetings that make sense.
    ///
    /// `index` is the entry's position in the input and only feeds log output.
    pub fn from_value_lenient(index: usize, value: &Value) -> Self {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        let Some(raw_meetings) = value.get("meetings").and_then(Value::as_array) else {
            warn!(calendar = index, "calendar has no meetings array; skipping");
            return Self {
                name,
                meetings: Vec::new(),
            };
        };

        let meetings = raw_meetings
            .iter()
            .enumerate()
            .filter_map(|(m, raw)| match meeting_from_value(raw) {
                Ok(meeting) => Some(meeting),
                Err(reason) => {
                    warn!(calendar = index, meeting = m, %reason, "dropping meeting");
                    None
                }
            })
            .collect();

        Self { name, meetings }
    }
}

fn meeting_from_value(value: &Value) -> std::result::Result<Meeting, String> {
    let field = |key: &str| -> std::result::Result<TimePoint, String> {
        let raw = value
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| format!("missing {}", key))?;
        TimePoint::parse(raw).map_err(|e| e.to_string())
    };

    let start = field("startTime")?;
    let end = field("endTime")?;
    if end < start {
        return Err(format!("endTime {} precedes startTime {}", end, start));
    }

    let subject = value
        .get("subject")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Meeting {
        start,
        end,
        subject,
    })
}
