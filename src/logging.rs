//! Logging
//!
//! Diagnostics go to stderr so a rendered statement on stdout stays clean.

use clap::Args;
use tracing_subscriber::{
    EnvFilter,
    util::{SubscriberInitExt, TryInitError},
};

/// How diagnostics are written to stderr.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event
    Compact,

    /// One JSON object per event, with the statement span attached
    Json,
}

/// Diagnostic output settings for the statement demo.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `playbill=debug` to see each statement build
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Diagnostic format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Install a global `tracing` subscriber writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.log_format {
        LogFormat::Compact => builder.compact().finish().try_init(),
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .finish()
            .try_init(),
    }
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_err| EnvFilter::new("warn"))
}
