//! Logging Config

use clap::Args;

/// Logging output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
