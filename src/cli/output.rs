//! Report types and console/JSON rendering for CLI commands

use crate::bucket::{bucket_to_unix_seconds, checked_bucket_to_unix, Bucket, Resolution};
use crate::errors::AppResult;
use crate::utils::time::bucket_window_iso;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable aligned key/value lines
    #[default]
    Console,
    /// Pretty-printed JSON for programmatic use
    Json,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Console => "console",
            OutputFormat::Json => "json",
        }
    }
}

/// Everything known about one bucket window
#[derive(Debug, Clone, Serialize)]
pub struct BucketReport {
    /// Timestamp argument as given, for `from-time`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub bucket: Bucket,
    pub window_start: String,
    pub window_end: String,
    pub start_unix_seconds: i64,
    /// `None` where the value overflows i64
    pub start_unix_millis: Option<i64>,
    pub start_unix_micros: Option<i64>,
    pub start_unix_nanos: Option<i64>,
}

impl BucketReport {
    pub fn new(bucket: Bucket) -> Self {
        let (window_start, window_end) = bucket_window_iso(bucket);
        Self {
            input: None,
            bucket,
            window_start,
            window_end,
            start_unix_seconds: bucket_to_unix_seconds(bucket),
            start_unix_millis: checked_bucket_to_unix(bucket, Resolution::Millis),
            start_unix_micros: checked_bucket_to_unix(bucket, Resolution::Micros),
            start_unix_nanos: checked_bucket_to_unix(bucket, Resolution::Nanos),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Console => {
                let mut lines = Vec::new();
                if let Some(input) = &self.input {
                    lines.push(format!("{:<14}{}", "Input:", input));
                }
                lines.push(format!("{:<14}{}", "Bucket:", self.bucket));
                lines.push(format!("{:<14}{}", "Window start:", self.window_start));
                lines.push(format!("{:<14}{}", "Window end:", self.window_end));
                lines.push(format!("{:<14}{}", "Unix seconds:", self.start_unix_seconds));
                lines.push(format!("{:<14}{}", "Unix millis:", show(self.start_unix_millis)));
                lines.push(format!("{:<14}{}", "Unix micros:", show(self.start_unix_micros)));
                lines.push(format!("{:<14}{}", "Unix nanos:", show(self.start_unix_nanos)));
                Ok(lines.join("\n"))
            }
        }
    }
}

/// Result of a single bucket-to-Unix conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub bucket: Bucket,
    pub resolution: Resolution,
    pub timestamp: i64,
}

impl ConversionReport {
    /// Console output is the bare number so it can be used in scripts
    pub fn render(&self, format: OutputFormat) -> AppResult<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Console => Ok(self.timestamp.to_string()),
        }
    }
}

fn show(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "overflow".to_string())
}
