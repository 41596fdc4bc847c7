//! Canonical UTC time points.
//!
//! Instants are held as `DateTime<Utc>` truncated to whole seconds and only
//! turned back into text at serialization boundaries, always in the form
//! `YYYY-MM-DDTHH:MM:SS+00:00`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// `strftime` pattern of the canonical wire format.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

/// A second-precision UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint(DateTime<Utc>);

impl TimePoint {
    /// Wrap an instant, dropping any sub-second part.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(0))
    }

    /// Build a time point from a UTC calendar date and wall-clock time.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, min, sec)?;
        Some(Self(date.and_time(time).and_utc()))
    }

    /// Parse any accepted timestamp and normalise it.
    ///
    /// Accepts RFC 3339 with an arbitrary offset (converted to UTC) or a naive
    /// `YYYY-MM-DDTHH:MM:SS` which is read as UTC.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_utc(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|ndt| Self::from_utc(ndt.and_utc()))
            .map_err(|e| SlotError::InvalidTimePoint(format!("'{}': {}", s, e)))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// The UTC calendar date this instant falls on.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Whole minutes from `self` to `later`.
    pub fn minutes_until(&self, later: TimePoint) -> i64 {
        (later.0 - self.0).num_minutes()
    }
}

impl From<DateTime<Utc>> for TimePoint {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

impl FromStr for TimePoint {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl Serialize for TimePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
