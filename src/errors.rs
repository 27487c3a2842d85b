use crate::bucket::{Bucket, Resolution};
use thiserror::Error;

/// Application-wide error type - single point of truth
///
/// Bucket conversions themselves never fail; these cover the CLI and config
/// layers around them.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timestamp argument could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Window start does not fit in an i64 at the requested resolution
    #[error("Bucket {bucket} overflows i64 at {resolution} resolution")]
    Overflow {
        bucket: Bucket,
        resolution: Resolution,
    },

    /// Bucket lies outside the representable date range
    #[error("Bucket {0} is outside the supported date range")]
    OutOfRange(Bucket),

    /// JSON serialisation
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
