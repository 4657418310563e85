//! Upcoming-mission filter and display ordering.

use chrono::{DateTime, NaiveTime, Utc};
use lw_core::entities::MissionRecord;

/// Seconds subtracted from the sort key of month-only labels.
///
/// Month-only dates default to month end, which would otherwise push them
/// behind exact dates earlier in the same month.
pub const MONTH_ONLY_SORT_OFFSET_SECS: i64 = 172_800;

/// UTC midnight of the day containing `now`.
#[must_use]
pub fn current_day_boundary(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Comparison key for one record. Never alters the record's date.
///
/// The offset applies to labels with exactly two date tokens (month, year),
/// counted the way the heading normalizer counts them: commas separate
/// tokens, so `January 3,2023` has three.
#[must_use]
pub fn sort_key(record: &MissionRecord) -> i64 {
    let epoch = record.date.midnight_epoch();
    if date_token_count(&record.human_label) == 2 {
        epoch - MONTH_ONLY_SORT_OFFSET_SECS
    } else {
        epoch
    }
}

fn date_token_count(label: &str) -> usize {
    label
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .count()
}

/// Keep missions dated on or after today (UTC) and order them by [`sort_key`].
///
/// The sort is stable, so equal keys keep source order.
#[must_use]
pub fn filter_and_sort(records: Vec<MissionRecord>, now: DateTime<Utc>) -> Vec<MissionRecord> {
    let boundary = current_day_boundary(now);
    let mut upcoming: Vec<MissionRecord> = records
        .into_iter()
        .filter(|record| record.date.midnight_utc() >= boundary)
        .collect();
    upcoming.sort_by_key(sort_key);
    upcoming
}
