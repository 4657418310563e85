use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Classification;

/// A fully resolved calendar date (year, month, day), always valid.
///
/// Serialized as an ISO 8601 date string (`"2023-01-03"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date, returning `None` if the triple is not a real calendar day.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// The UTC midnight instant that starts this day.
    #[must_use]
    pub fn midnight_utc(self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Seconds since the Unix epoch of [`Self::midnight_utc`].
    #[must_use]
    pub fn midnight_epoch(self) -> i64 {
        self.midnight_utc().timestamp()
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A single scheduled launch with a fully resolved date.
///
/// Created fresh on every run and never persisted; only the signature over a
/// sequence of these is stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MissionRecord {
    pub date: CalendarDate,
    /// The date phrase as shown on the source page, whitespace-collapsed.
    pub human_label: String,
    pub title: String,
    pub anchor_id: Option<String>,
    pub detail_text: Option<String>,
    pub classification: Classification,
}
