// File: crates/feature-chart/src/labels.rs
// Summary: Epoch-second timestamps to local date-time axis labels.
// Format matches the default en-US locale string: `11/14/2023, 10:13:20 PM`.

use std::fmt::Display;

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Label used for timestamps that cannot be represented as a date.
pub const INVALID_DATE: &str = "Invalid Date";

// The year is printed separately: `%Y` adds a `+` sign past year 9999.
const MONTH_DAY_FORMAT: &str = "%-m/%-d/";
const TIME_FORMAT: &str = ", %-I:%M:%S %p";

/// Largest date distance from the epoch, in milliseconds (±100,000,000 days).
/// chrono stops near year 262143 (about 8.2e15 ms); later instants are also invalid.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Format epoch seconds as a date-time string in the host's local timezone.
pub fn format_timestamp(seconds: f64) -> String {
    format_timestamp_in(seconds, &Local)
}

/// Format epoch seconds as a date-time string in `tz`.
/// Fractional seconds are kept down to the millisecond before formatting.
pub fn format_timestamp_in<Tz>(seconds: f64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let millis = seconds * 1000.0;
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return INVALID_DATE.to_string();
    }
    match DateTime::from_timestamp_millis(millis.trunc() as i64) {
        Some(utc) => {
            let local = utc.with_timezone(tz);
            format!("{}{}{}", local.format(MONTH_DAY_FORMAT), local.year(), local.format(TIME_FORMAT))
        }
        None => INVALID_DATE.to_string(),
    }
}

/// Labels for every timestamp, in the same order.
pub fn timestamp_labels(timestamps: &[f64]) -> Vec<String> {
    timestamp_labels_in(timestamps, &Local)
}

pub fn timestamp_labels_in<Tz>(timestamps: &[f64], tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamps.iter().map(|ts| format_timestamp_in(*ts, tz)).collect()
}
