//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Flat-file storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding the JSON record files
    #[arg(short, long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,
}
