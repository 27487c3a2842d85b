use crate::bucket::time_to_bucket;
use crate::cli::output::BucketReport;
use crate::cli::Context;
use crate::errors::AppResult;
use crate::utils::time::{parse_timestamp, InputFormat};
use clap::Args;
use tracing::{debug, info};

/// Compute the bucket containing a timestamp
#[derive(Args, Debug)]
pub struct FromTimeCommand {
    /// RFC 3339 date-time or Unix epoch integer
    #[arg(allow_negative_numbers = true)]
    pub timestamp: String,

    /// How to interpret the timestamp
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    pub input: InputFormat,
}

impl FromTimeCommand {
    pub fn run(&self, ctx: &Context) -> AppResult<String> {
        let time = parse_timestamp(&self.timestamp, self.input)?;
        debug!("Parsed '{}' as {}", self.timestamp, time.to_rfc3339());

        let bucket = time_to_bucket(&time);
        info!("{} falls in bucket {}", time.to_rfc3339(), bucket);
        BucketReport::new(bucket)
            .with_input(self.timestamp.as_str())
            .render(ctx.format)
    }
}
