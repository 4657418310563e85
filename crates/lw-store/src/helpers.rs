//! Row-to-entity parsing helpers.
//!
//! `run_log` rows are column-indexed `libsql::Row`s; these helpers convert
//! the TEXT columns into typed values and handle the dual datetime format
//! (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};
use lw_core::Signature;
use lw_core::entities::RunLogEntry;

use crate::error::StoreError;

/// Parse a TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2023-01-03T06:00:00+00:00"`) and `SQLite`'s default
/// format (`"2023-01-03 06:00:00"`).
///
/// # Errors
///
/// Returns `StoreError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| StoreError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all lw-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `StoreError::Query` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, StoreError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| StoreError::Query(format!("Failed to parse enum from '{s}': {e}")))
}

/// Parse a stored digest, rejecting anything that is not a well-formed signature.
///
/// # Errors
///
/// Returns `StoreError::Corrupt` with the raw value.
pub fn parse_signature(s: &str) -> Result<Signature, StoreError> {
    Signature::parse(s).ok_or_else(|| StoreError::Corrupt(s.to_string()))
}

/// Decode a `run_log` row selected as `logged_at, outcome, signature, mission_count`.
///
/// # Errors
///
/// Returns `StoreError` if a column is missing or malformed.
pub fn run_log_from_row(row: &libsql::Row) -> Result<RunLogEntry, StoreError> {
    let count = row.get::<i64>(3)?;
    Ok(RunLogEntry {
        logged_at: parse_datetime(&row.get::<String>(0)?)?,
        outcome: parse_enum(&row.get::<String>(1)?)?,
        signature: parse_signature(&row.get::<String>(2)?)?,
        mission_count: usize::try_from(count)
            .map_err(|_| StoreError::Query(format!("negative mission_count {count}")))?,
    })
}
