//! Configuration types for the Shopping samples.
//!
//! This module loads the per-user configuration directory the samples read
//! their settings and credentials from, and resolves the API endpoint.
//!
//! # Layout
//!
//! ```text
//! $HOME/shopping-samples/
//! └── content/
//!     ├── merchant-info.json     (optional, {"merchantId": 1234})
//!     ├── service-account.json   (service account key)
//!     ├── client-secrets.json    (OAuth client for user credentials)
//!     └── stored-token.json      (refresh token for user credentials)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use shopping_samples::SamplesConfig;
//!
//! let config = SamplesConfig::load("/home/me/shopping-samples").unwrap();
//! println!("{:?}", config.merchant_id());
//! ```

mod endpoint;
mod newtypes;

pub use endpoint::{Endpoint, DEFAULT_ROOT_URL, DEFAULT_SERVICE_PATH, ENDPOINT_ENV_VAR};
pub use newtypes::MerchantId;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Name of the directory holding Content API configuration.
pub const CONTENT_DIR: &str = "content";

/// Name of the optional file holding the merchant ID.
pub const MERCHANT_INFO_FILE: &str = "merchant-info.json";

/// Shape of `merchant-info.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MerchantInfoFile {
    merchant_id: Option<MerchantId>,
}

/// Configuration loaded from a samples configuration directory.
///
/// Loaded once at startup and not modified afterwards.
#[derive(Clone, Debug)]
pub struct SamplesConfig {
    path: PathBuf,
    merchant_id: Option<MerchantId>,
}

impl SamplesConfig {
    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDirectory`] if `path` or its `content`
    /// subdirectory does not exist, and [`ConfigError::InvalidFile`] if
    /// `merchant-info.json` exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingDirectory {
                path: path.to_path_buf(),
            });
        }

        let content_dir = path.join(CONTENT_DIR);
        if !content_dir.exists() {
            return Err(ConfigError::MissingDirectory { path: content_dir });
        }

        let info_path = content_dir.join(MERCHANT_INFO_FILE);
        let info = if info_path.exists() {
            read_json::<MerchantInfoFile>(&info_path)?
        } else {
            tracing::debug!(path = %info_path.display(), "no merchant info file");
            MerchantInfoFile::default()
        };

        Ok(Self {
            path: path.to_path_buf(),
            merchant_id: info.merchant_id,
        })
    }

    /// Returns the root configuration directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the directory holding Content API files.
    #[must_use]
    pub fn content_dir(&self) -> PathBuf {
        self.path.join(CONTENT_DIR)
    }

    /// Returns the configured merchant ID, if any.
    #[must_use]
    pub const fn merchant_id(&self) -> Option<MerchantId> {
        self.merchant_id
    }
}

/// Reads and deserializes a JSON configuration file.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidFile {
        path: path.to_path_buf(),
        reason,
    };
    let text = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))
}
