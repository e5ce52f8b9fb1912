//! # Google Shopping Content API samples
//!
//! Sample programs for the Google Shopping Content API, and the small
//! library they share for configuration, authentication, and paging.
//!
//! ## Overview
//!
//! This crate provides:
//! - Configuration directory loading via [`SamplesConfig`]
//! - Endpoint resolution with an environment override via [`Endpoint`]
//! - OAuth2 access tokens from a service account key or a stored refresh
//!   token via [`auth::Authenticator`]
//! - An authenticated HTTP client with Google JSON error classification via
//!   [`clients::HttpClient`]
//! - Typed Content API calls and paginated list calls via
//!   [`content::ContentService`]
//! - The sample runner and the sample binaries in [`samples`]
//!
//! ## Configuration Directory
//!
//! ```text
//! $HOME/shopping-samples/
//! └── content/
//!     ├── merchant-info.json      optional, {"merchantId": 1234}
//!     ├── service-account.json    or
//!     ├── client-secrets.json  +  stored-token.json
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use shopping_samples::{ConfigError, Endpoint, MerchantId};
//!
//! let merchant_id: MerchantId = "1234".parse().unwrap();
//! assert_eq!(merchant_id.get(), 1234);
//!
//! let endpoint = Endpoint::resolve(None).unwrap();
//! assert_eq!(endpoint.override_url(), None);
//!
//! let error = Endpoint::resolve(Some("content/v2.1")).unwrap_err();
//! assert!(matches!(error, ConfigError::InvalidEndpoint { .. }));
//! ```
//!
//! ## Running a Sample
//!
//! ```rust,ignore
//! use shopping_samples::samples::{products::ProductsList, run_main};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> std::process::ExitCode {
//!     run_main::<ProductsList>().await
//! }
//! ```

pub mod auth;
pub mod cli;
pub mod clients;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod samples;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, Authenticator, CredentialSource};
pub use config::{Endpoint, MerchantId, SamplesConfig, ENDPOINT_ENV_VAR};
pub use error::{ConfigError, SampleError};

pub use clients::{HttpClient, HttpError, HttpRequest, HttpResponse, HttpResponseError};
pub use content::{ContentService, ListCall, Page};
pub use samples::{ContentSample, Sample};
