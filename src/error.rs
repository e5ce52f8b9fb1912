//! Error types for the Shopping samples.
//!
//! This module contains the configuration error raised while bootstrapping a
//! sample and the top-level [`SampleError`] that every sample returns.
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation before any network call is made. Errors from the
//! lower layers ([`AuthError`], [`HttpError`]) are folded into
//! [`SampleError`] with `?`.
//!
//! # Example
//!
//! ```rust
//! use shopping_samples::{ConfigError, MerchantId};
//!
//! let result = MerchantId::new(0);
//! assert!(matches!(result, Err(ConfigError::InvalidMerchantId { .. })));
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::HttpError;
use crate::config::MerchantId;

/// Errors that can occur while loading sample configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required configuration directory does not exist.
    #[error("Configuration directory '{}' does not exist.", path.display())]
    MissingDirectory {
        /// The directory that was expected.
        path: PathBuf,
    },

    /// A configuration file could not be read or parsed.
    #[error("Invalid configuration file '{}': {reason}", path.display())]
    InvalidFile {
        /// The offending file.
        path: PathBuf,
        /// Why the file was rejected.
        reason: String,
    },

    /// Merchant ID is invalid.
    #[error("Invalid merchant ID '{value}'. Expected a positive integer.")]
    InvalidMerchantId {
        /// The value that was provided.
        value: String,
    },

    /// The endpoint override is not an absolute URL.
    #[error("Endpoint URL must be absolute: {url} ({reason})")]
    InvalidEndpoint {
        /// The URL that was provided.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// No home directory could be determined for the default config path.
    #[error("Could not determine a home directory. Pass --config_path explicitly.")]
    NoHomeDirectory,
}

/// Top-level error returned by samples and the sample runner.
///
/// Any error reaching the runner terminates the process with a non-zero
/// status, except structured 4xx API errors, which are printed and
/// swallowed by [`check_json_error`](crate::samples::check_json_error).
#[derive(Debug, Error)]
pub enum SampleError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Credentials could not be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// An API call failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The HTTPS transport could not be initialized.
    #[error("Failed to initialize HTTPS transport: {0}")]
    Transport(#[source] reqwest::Error),

    /// The authenticated user has no Merchant Center account.
    #[error("Authenticated user has no access to any Merchant Center accounts.")]
    NoMerchantAccess,

    /// The sample was run against the wrong kind of account.
    #[error("This sample {requirement}, but Merchant Center {merchant_id} {actual}.")]
    AccountKind {
        /// The configured merchant ID.
        merchant_id: MerchantId,
        /// What the sample needs.
        requirement: &'static str,
        /// What the account actually is.
        actual: &'static str,
    },

    /// Writing sample output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_error_message() {
        let error = ConfigError::MissingDirectory {
            path: PathBuf::from("/nope/shopping-samples"),
        };
        let message = error.to_string();
        assert!(message.contains("/nope/shopping-samples"));
        assert!(message.contains("does not exist"));
    }

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "content/v2.1".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(error
            .to_string()
            .starts_with("Endpoint URL must be absolute: content/v2.1"));
    }

    #[test]
    fn test_account_kind_error_message() {
        let error = SampleError::AccountKind {
            merchant_id: MerchantId::new(1234).unwrap(),
            requirement: "requires a non-MCA account",
            actual: "is an MCA",
        };
        assert_eq!(
            error.to_string(),
            "This sample requires a non-MCA account, but Merchant Center 1234 is an MCA."
        );
    }

    #[test]
    fn test_config_error_converts_into_sample_error() {
        let error: SampleError = ConfigError::NoHomeDirectory.into();
        assert!(matches!(
            error,
            SampleError::Config(ConfigError::NoHomeDirectory)
        ));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::NoHomeDirectory;
        let _: &dyn std::error::Error = &error;
    }
}
