use crate::bucket::current_bucket;
use crate::cli::output::BucketReport;
use crate::cli::Context;
use crate::errors::AppResult;
use clap::Args;
use tracing::info;

/// Show the bucket containing the current UTC time
#[derive(Args, Debug)]
pub struct NowCommand {}

impl NowCommand {
    pub fn run(&self, ctx: &Context) -> AppResult<String> {
        let bucket = current_bucket();
        info!("Current bucket: {}", bucket);
        BucketReport::new(bucket).render(ctx.format)
    }
}
