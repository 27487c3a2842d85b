use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

pub mod commands;
pub mod output;

use output::OutputFormat;

/// Minute bucket calculator
#[derive(Parser)]
#[command(name = "minute-bucket")]
#[command(about = "Compute 60-second UTC bucket ids and convert them back to Unix time")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides output.format)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the bucket containing the current UTC time
    Now(commands::now::NowCommand),
    /// Compute the bucket containing a timestamp
    FromTime(commands::from_time::FromTimeCommand),
    /// Convert a bucket to the Unix timestamp of its window start
    ToUnix(commands::to_unix::ToUnixCommand),
    /// Show the window covered by a bucket
    Window(commands::window::WindowCommand),
}

/// Settings resolved from config and global flags, shared by all commands
#[derive(Debug, Clone)]
pub struct Context {
    pub config: AppConfig,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: AppConfig, format_flag: Option<OutputFormat>) -> Self {
        let format = format_flag.unwrap_or(config.output.format);
        Self { config, format }
    }
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    // a malformed ./config.toml or MINUTE_BUCKET_* value fails the same way as --config
    let config = AppConfig::load(cli.config.as_deref())?;

    // RUST_LOG wins over logging.filter; logs go to stderr so stdout stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    debug!("Loaded configuration: {:?}", config);
    let ctx = Context::new(config, cli.format);

    let rendered = match cli.command {
        Commands::Now(command) => command.run(&ctx)?,
        Commands::FromTime(command) => command.run(&ctx)?,
        Commands::ToUnix(command) => command.run(&ctx)?,
        Commands::Window(command) => command.run(&ctx)?,
    };
    println!("{}", rendered);
    Ok(())
}
