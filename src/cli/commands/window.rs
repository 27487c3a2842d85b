use crate::bucket::{bucket_start, Bucket};
use crate::cli::output::BucketReport;
use crate::cli::Context;
use crate::errors::{AppError, AppResult};
use clap::Args;

/// Show the window covered by a bucket
#[derive(Args, Debug)]
pub struct WindowCommand {
    /// Bucket id
    #[arg(allow_negative_numbers = true)]
    pub bucket: Bucket,
}

impl WindowCommand {
    pub fn run(&self, ctx: &Context) -> AppResult<String> {
        if bucket_start(self.bucket).is_none() {
            return Err(AppError::OutOfRange(self.bucket));
        }
        BucketReport::new(self.bucket).render(ctx.format)
    }
}
