//! Command line flags shared by every sample.

use std::path::PathBuf;

use clap::{Args, Parser};
use directories::BaseDirs;

use crate::error::ConfigError;

/// Directory under `$HOME` used when `--config_path` is not given.
pub const DEFAULT_CONFIG_DIR: &str = "shopping-samples";

/// Flags every sample accepts. `-h/--help` is provided by clap.
#[derive(Args, Clone, Debug, Default)]
pub struct BaseArgs {
    /// Configuration directory for the samples [default: $HOME/shopping-samples]
    #[arg(short = 'c', long = "config_path", value_name = "DIR")]
    pub config_path: Option<PathBuf>,
}

impl BaseArgs {
    /// Returns the configuration directory to load.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHomeDirectory`] if no path was given and no
    /// home directory can be determined.
    pub fn config_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => default_config_dir(),
        }
    }
}

/// Returns `$HOME/shopping-samples`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if no home directory can be
/// determined.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DEFAULT_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Flags for a sample that needs nothing beyond [`BaseArgs`].
#[derive(Args, Clone, Debug, Default)]
pub struct NoArgs {}

/// Flags for samples that operate on a single product.
#[derive(Args, Clone, Debug)]
pub struct ProductArgs {
    /// REST ID of the product, e.g. online:en:US:sku-1
    #[arg(long = "product_id", value_name = "ID")]
    pub product_id: String,
}

/// Full command line of a sample: shared flags plus the sample's own.
#[derive(Parser, Debug)]
#[command(version, about = "Google Shopping Content API sample")]
pub struct Cli<A: Args> {
    #[command(flatten)]
    pub base: BaseArgs,

    #[command(flatten)]
    pub sample: A,
}
