//! Minute bucket identifiers
//!
//! Groups events into fixed 60-second UTC windows so independent components
//! agree on a window id without coordinating clocks.

pub mod bucket;
pub mod cli;
pub mod config;
pub mod errors;
pub mod utils;

pub use bucket::{
    bucket_to_unix_micros, bucket_to_unix_millis, bucket_to_unix_nanos, bucket_to_unix_seconds,
    current_bucket, time_to_bucket, Bucket, Resolution, SECONDS_PER_BUCKET,
};
