//! Minute bucket conversions
//!
//! A bucket is the integer index of a fixed-width UTC window counted from the
//! Unix epoch: `bucket = floor(unix_seconds / SECONDS_PER_BUCKET)`. Any two
//! callers reading the clock inside the same window compute the same bucket,
//! so buckets can key rate limits, metric rollups or cache partitions without
//! any clock coordination.
//!
//! Every function here is pure apart from [`current_bucket`], which reads the
//! system clock. Nothing returns an error: conversions back to Unix time wrap
//! on `i64` overflow, and [`checked_bucket_to_unix`] is available for callers
//! that need to detect it.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket identifier (window index since the epoch)
pub type Bucket = i64;

/// Minutes covered by a single bucket. Fixed at build time.
pub const MINUTES_PER_BUCKET: i64 = 1;

/// Seconds in a minute (60)
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Window width in seconds (60 × MINUTES_PER_BUCKET)
pub const SECONDS_PER_BUCKET: i64 = SECONDS_PER_MINUTE * MINUTES_PER_BUCKET;

/// Window width in milliseconds
pub const MILLIS_PER_BUCKET: i64 = SECONDS_PER_BUCKET * 1_000;

/// Window width in microseconds
pub const MICROS_PER_BUCKET: i64 = SECONDS_PER_BUCKET * 1_000_000;

/// Window width in nanoseconds
pub const NANOS_PER_BUCKET: i64 = SECONDS_PER_BUCKET * 1_000_000_000;

/// Unit of a Unix timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    #[default]
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::Seconds,
        Resolution::Millis,
        Resolution::Micros,
        Resolution::Nanos,
    ];

    /// Timestamp units in one second
    pub const fn units_per_second(self) -> i64 {
        match self {
            Resolution::Seconds => 1,
            Resolution::Millis => 1_000,
            Resolution::Micros => 1_000_000,
            Resolution::Nanos => 1_000_000_000,
        }
    }

    /// Timestamp units spanned by one bucket
    pub const fn units_per_bucket(self) -> i64 {
        match self {
            Resolution::Seconds => SECONDS_PER_BUCKET,
            Resolution::Millis => MILLIS_PER_BUCKET,
            Resolution::Micros => MICROS_PER_BUCKET,
            Resolution::Nanos => NANOS_PER_BUCKET,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Resolution::Seconds => "seconds",
            Resolution::Millis => "millis",
            Resolution::Micros => "micros",
            Resolution::Nanos => "nanos",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket containing the current UTC time
pub fn current_bucket() -> Bucket {
    time_to_bucket(&Utc::now())
}

/// Bucket containing `t`, in whatever timezone it was expressed
///
/// The instant is normalised to UTC first, so the offset never affects the
/// result.
///
/// # Examples
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use minute_bucket::bucket::time_to_bucket;
///
/// let t = FixedOffset::east_opt(2 * 3600)
///     .unwrap()
///     .timestamp_opt(1_700_000_000, 0)
///     .unwrap();
/// assert_eq!(time_to_bucket(&t), 28_333_333);
/// ```
pub fn time_to_bucket<Tz: TimeZone>(t: &DateTime<Tz>) -> Bucket {
    unix_seconds_to_bucket(t.with_timezone(&Utc).timestamp())
}

/// Bucket containing a raw Unix timestamp in seconds
///
/// Uses floor division, so pre-epoch seconds land in negative buckets
/// (`-1` is bucket `-1`).
///
/// # Examples
/// ```
/// use minute_bucket::bucket::unix_seconds_to_bucket;
/// assert_eq!(unix_seconds_to_bucket(1_700_000_000), 28_333_333);
/// assert_eq!(unix_seconds_to_bucket(1_700_000_060), 28_333_334);
/// ```
pub fn unix_seconds_to_bucket(seconds: i64) -> Bucket {
    seconds.div_euclid(SECONDS_PER_BUCKET)
}

/// Bucket containing a Unix timestamp expressed at `resolution`
pub fn unix_to_bucket(timestamp: i64, resolution: Resolution) -> Bucket {
    timestamp.div_euclid(resolution.units_per_bucket())
}

/// Start of the bucket window as Unix seconds
///
/// # Examples
/// ```
/// use minute_bucket::bucket::bucket_to_unix_seconds;
/// assert_eq!(bucket_to_unix_seconds(28_333_333), 1_699_999_980);
/// ```
pub fn bucket_to_unix_seconds(bucket: Bucket) -> i64 {
    bucket.wrapping_mul(SECONDS_PER_BUCKET)
}

/// Start of the bucket window as Unix milliseconds
pub fn bucket_to_unix_millis(bucket: Bucket) -> i64 {
    bucket.wrapping_mul(MILLIS_PER_BUCKET)
}

/// Start of the bucket window as Unix microseconds
pub fn bucket_to_unix_micros(bucket: Bucket) -> i64 {
    bucket.wrapping_mul(MICROS_PER_BUCKET)
}

/// Start of the bucket window as Unix nanoseconds
///
/// Wraps for buckets beyond roughly ±292 years from the epoch.
pub fn bucket_to_unix_nanos(bucket: Bucket) -> i64 {
    bucket.wrapping_mul(NANOS_PER_BUCKET)
}

/// Start of the bucket window at the given resolution
pub fn bucket_to_unix(bucket: Bucket, resolution: Resolution) -> i64 {
    match resolution {
        Resolution::Seconds => bucket_to_unix_seconds(bucket),
        Resolution::Millis => bucket_to_unix_millis(bucket),
        Resolution::Micros => bucket_to_unix_micros(bucket),
        Resolution::Nanos => bucket_to_unix_nanos(bucket),
    }
}

/// Like [`bucket_to_unix`] but returns `None` instead of wrapping
pub fn checked_bucket_to_unix(bucket: Bucket, resolution: Resolution) -> Option<i64> {
    bucket.checked_mul(resolution.units_per_bucket())
}

/// First instant of the bucket window
///
/// `None` if the window lies outside chrono's representable range.
pub fn bucket_start(bucket: Bucket) -> Option<DateTime<Utc>> {
    let seconds = checked_bucket_to_unix(bucket, Resolution::Seconds)?;
    Utc.timestamp_opt(seconds, 0).single()
}

/// Last nanosecond inside the bucket window
pub fn bucket_end(bucket: Bucket) -> Option<DateTime<Utc>> {
    bucket_start(bucket)?.checked_add_signed(Duration::nanoseconds(NANOS_PER_BUCKET - 1))
}
