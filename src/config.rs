use crate::bucket::Resolution;
use crate::cli::output::OutputFormat;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from config.toml or environment variables
///
/// Only presentation settings live here. The bucket width is a compile-time
/// constant and has no config key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Default resolution for `to-unix`
    pub resolution: Resolution,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing EnvFilter directive, used when RUST_LOG is unset
    pub filter: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            resolution: Resolution::Seconds,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "error".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a config file and environment variables
    ///
    /// With `path` the file must exist; without it `./config.toml` is used if
    /// present. MINUTE_BUCKET_* environment variables take precedence over
    /// the file (`MINUTE_BUCKET_OUTPUT__FORMAT=json`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("config").required(false),
        };

        let config = Config::builder()
            .set_default("output.format", defaults.output.format.as_str())?
            .set_default("output.resolution", defaults.output.resolution.as_str())?
            .set_default("logging.filter", defaults.logging.filter)?
            .add_source(file)
            .add_source(
                Environment::with_prefix("MINUTE_BUCKET")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
