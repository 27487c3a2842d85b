use crate::bucket::{checked_bucket_to_unix, Bucket, Resolution};
use crate::cli::output::ConversionReport;
use crate::cli::Context;
use crate::errors::{AppError, AppResult};
use clap::{Args, ValueEnum};
use tracing::info;

/// Command-line spelling of a [`Resolution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolutionArg {
    Seconds,
    Millis,
    Micros,
    Nanos,
}

impl From<ResolutionArg> for Resolution {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::Seconds => Resolution::Seconds,
            ResolutionArg::Millis => Resolution::Millis,
            ResolutionArg::Micros => Resolution::Micros,
            ResolutionArg::Nanos => Resolution::Nanos,
        }
    }
}

/// Convert a bucket to the Unix timestamp of its window start
#[derive(Args, Debug)]
pub struct ToUnixCommand {
    /// Bucket id
    #[arg(allow_negative_numbers = true)]
    pub bucket: Bucket,

    /// Timestamp unit (defaults to output.resolution from config)
    #[arg(long, value_enum)]
    pub resolution: Option<ResolutionArg>,
}

impl ToUnixCommand {
    pub fn run(&self, ctx: &Context) -> AppResult<String> {
        let resolution = self
            .resolution
            .map(Resolution::from)
            .unwrap_or(ctx.config.output.resolution);
        let timestamp =
            checked_bucket_to_unix(self.bucket, resolution).ok_or(AppError::Overflow {
                bucket: self.bucket,
                resolution,
            })?;

        info!("Bucket {} starts at {} ({})", self.bucket, timestamp, resolution);
        ConversionReport {
            bucket: self.bucket,
            resolution,
            timestamp,
        }
        .render(ctx.format)
    }
}
