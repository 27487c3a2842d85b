//! Time utilities for bucket presentation
//!
//! Rendering bucket windows as ISO 8601 strings and parsing the timestamp
//! forms accepted on the command line.

use crate::bucket::{bucket_to_unix_seconds, Bucket, Resolution, SECONDS_PER_BUCKET};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use clap::ValueEnum;

/// Accepted spellings of a timestamp argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// RFC 3339 with explicit offset, e.g. 2023-11-14T22:13:20Z
    Rfc3339,
    Seconds,
    Millis,
    Micros,
    Nanos,
    /// RFC 3339, or an epoch integer whose unit is inferred from its magnitude
    #[default]
    Auto,
}

/// Convert Unix timestamp to an RFC 3339 UTC string (seconds precision)
///
/// Returns "1970-01-01T00:00:00Z" for out-of-range timestamps.
///
/// # Examples
/// ```
/// use minute_bucket::utils::time::timestamp_to_iso;
/// assert_eq!(timestamp_to_iso(0), "1970-01-01T00:00:00Z");
/// assert_eq!(timestamp_to_iso(1699999980), "2023-11-14T22:13:00Z");
/// ```
pub fn timestamp_to_iso(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string())
}

/// First and last second of a bucket window
///
/// Returns (window_start_iso, window_end_iso) tuple.
///
/// # Examples
/// ```
/// use minute_bucket::utils::time::bucket_window_iso;
/// let (start, end) = bucket_window_iso(0);
/// assert_eq!(start, "1970-01-01T00:00:00Z");
/// assert_eq!(end, "1970-01-01T00:00:59Z");
/// ```
pub fn bucket_window_iso(bucket: Bucket) -> (String, String) {
    let start = bucket_to_unix_seconds(bucket);
    (
        timestamp_to_iso(start),
        timestamp_to_iso(start.wrapping_add(SECONDS_PER_BUCKET - 1)),
    )
}

/// Parse a timestamp argument into an offset-aware date-time
pub fn parse_timestamp(input: &str, format: InputFormat) -> AppResult<DateTime<FixedOffset>> {
    let input = input.trim();
    match format {
        InputFormat::Rfc3339 => parse_rfc3339(input),
        InputFormat::Seconds => parse_epoch(input, Resolution::Seconds),
        InputFormat::Millis => parse_epoch(input, Resolution::Millis),
        InputFormat::Micros => parse_epoch(input, Resolution::Micros),
        InputFormat::Nanos => parse_epoch(input, Resolution::Nanos),
        InputFormat::Auto => match input.parse::<i64>() {
            Ok(value) => epoch_to_datetime(value, infer_resolution(value)),
            Err(_) => parse_rfc3339(input),
        },
    }
}

/// Guess the unit of a bare epoch integer from its magnitude
///
/// Seconds cover dates up to year ~5138, so anything larger is taken to be
/// a finer unit.
pub fn infer_resolution(value: i64) -> Resolution {
    match value.unsigned_abs() {
        v if v < 100_000_000_000 => Resolution::Seconds,
        v if v < 100_000_000_000_000 => Resolution::Millis,
        v if v < 100_000_000_000_000_000 => Resolution::Micros,
        _ => Resolution::Nanos,
    }
}

fn parse_rfc3339(input: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input)
        .map_err(|e| AppError::InvalidTimestamp(format!("'{}': {}", input, e)))
}

fn parse_epoch(input: &str, resolution: Resolution) -> AppResult<DateTime<FixedOffset>> {
    let value = input.parse::<i64>().map_err(|e| {
        AppError::InvalidTimestamp(format!("'{}' is not an integer: {}", input, e))
    })?;
    epoch_to_datetime(value, resolution)
}

fn epoch_to_datetime(value: i64, resolution: Resolution) -> AppResult<DateTime<FixedOffset>> {
    let per_second = resolution.units_per_second();
    let seconds = value.div_euclid(per_second);
    // sub-second remainder scaled up to nanoseconds
    let nanos = (value.rem_euclid(per_second) * (1_000_000_000 / per_second)) as u32;

    Utc.timestamp_opt(seconds, nanos)
        .single()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| {
            AppError::InvalidTimestamp(format!(
                "{} {} is outside the supported date range",
                value, resolution
            ))
        })
}
