//! Authentication for the Shopping samples.
//!
//! This module locates credential material in the samples configuration
//! directory and turns it into OAuth2 access tokens.
//!
//! # Overview
//!
//! - [`Authenticator`]: picks a credential source and hands out access tokens
//! - [`CredentialSource`]: where tokens come from
//! - [`Credential`]: an access token with its expiry
//! - [`ServiceAccountKey`]: service account key, exchanged via a signed JWT
//! - [`UserCredentials`]: OAuth client plus stored refresh token
//!
//! # Credential Lookup
//!
//! Sources are tried in this order:
//!
//! 1. `content/service-account.json`
//! 2. The file named by `GOOGLE_APPLICATION_CREDENTIALS`
//!    (`service_account` or `authorized_user`)
//! 3. `content/client-secrets.json` together with `content/stored-token.json`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopping_samples::auth::Authenticator;
//!
//! let authenticator = Authenticator::load(&config.content_dir(), transport.clone())?;
//! let credential = authenticator.authenticate().await?;
//! ```

mod credential;
mod error;
mod service_account;
mod user_account;

pub use credential::{Credential, GOOGLE_TOKEN_URI};
pub use error::AuthError;
pub use service_account::ServiceAccountKey;
pub use user_account::UserCredentials;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::sync::Mutex;

/// OAuth2 scope granting access to the Content API.
pub const CONTENT_SCOPE: &str = "https://www.googleapis.com/auth/content";

/// Environment variable naming an application default credentials file.
pub const ADC_ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Service account key file name.
pub const SERVICE_ACCOUNT_FILE: &str = "service-account.json";

/// OAuth client file name.
pub const CLIENT_SECRETS_FILE: &str = "client-secrets.json";

/// Stored refresh token file name.
pub const STORED_TOKEN_FILE: &str = "stored-token.json";

/// Where access tokens come from.
#[derive(Clone, Debug)]
pub enum CredentialSource {
    /// A service account key.
    ServiceAccount(ServiceAccountKey),
    /// An OAuth client with a user's refresh token.
    User(UserCredentials),
}

/// Application default credentials file, discriminated by `type`.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AdcFile {
    ServiceAccount(ServiceAccountKey),
    AuthorizedUser(UserCredentials),
}

impl From<AdcFile> for CredentialSource {
    fn from(file: AdcFile) -> Self {
        match file {
            AdcFile::ServiceAccount(key) => Self::ServiceAccount(key),
            AdcFile::AuthorizedUser(user) => Self::User(user),
        }
    }
}

/// Produces access tokens for API requests.
///
/// The most recent token is cached and refreshed transparently once it
/// expires.
///
/// # Thread Safety
///
/// `Authenticator` is `Send + Sync`; the token cache sits behind an async
/// mutex.
#[derive(Debug)]
pub struct Authenticator {
    source: CredentialSource,
    client: reqwest::Client,
    cached: Mutex<Option<Credential>>,
}

// Verify Authenticator is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Authenticator>();
};

impl Authenticator {
    /// Creates an authenticator for an explicit credential source.
    #[must_use]
    pub fn new(source: CredentialSource, client: reqwest::Client) -> Self {
        Self {
            source,
            client,
            cached: Mutex::new(None),
        }
    }

    /// Locates credentials in `content_dir`, consulting
    /// [`ADC_ENV_VAR`] as described in the [module docs](self).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NoCredentials`] if no source is found, or
    /// [`AuthError::CredentialFile`] if a source is present but invalid.
    pub fn load(content_dir: &Path, client: reqwest::Client) -> Result<Self, AuthError> {
        let adc = std::env::var_os(ADC_ENV_VAR).map(PathBuf::from);
        Self::load_with(content_dir, adc.as_deref(), client)
    }

    /// Like [`load`](Self::load), with the application default credentials
    /// path passed explicitly.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with(
        content_dir: &Path,
        adc: Option<&Path>,
        client: reqwest::Client,
    ) -> Result<Self, AuthError> {
        let source = locate_source(content_dir, adc)?;
        Ok(Self::new(source, client))
    }

    /// Returns the credential source in use.
    #[must_use]
    pub const fn source(&self) -> &CredentialSource {
        &self.source
    }

    /// Fetches a fresh token from the source and caches it.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if signing or the token request fails.
    pub async fn authenticate(&self) -> Result<Credential, AuthError> {
        let mut cached = self.cached.lock().await;
        let credential = self.fetch().await?;
        *cached = Some(credential.clone());
        Ok(credential)
    }

    /// Returns a valid access token, refreshing the cached one if needed.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if a refresh is needed and fails.
    pub async fn access_token(&self) -> Result<String, AuthError> {
        let mut cached = self.cached.lock().await;
        if let Some(credential) = cached.as_ref().filter(|c| !c.is_expired()) {
            return Ok(credential.access_token().to_string());
        }

        tracing::info!("access token missing or expired, refreshing");
        let credential = self.fetch().await?;
        let token = credential.access_token().to_string();
        *cached = Some(credential);
        Ok(token)
    }

    async fn fetch(&self) -> Result<Credential, AuthError> {
        match &self.source {
            CredentialSource::ServiceAccount(key) => {
                key.fetch_token(&self.client, CONTENT_SCOPE).await
            }
            CredentialSource::User(user) => user.fetch_token(&self.client).await,
        }
    }
}

fn locate_source(content_dir: &Path, adc: Option<&Path>) -> Result<CredentialSource, AuthError> {
    let service_account = content_dir.join(SERVICE_ACCOUNT_FILE);
    if service_account.exists() {
        tracing::info!(path = %service_account.display(), "using service account credentials");
        let key: ServiceAccountKey = read_credential_file(&service_account)?;
        return Ok(CredentialSource::ServiceAccount(key));
    }

    if let Some(adc) = adc {
        tracing::info!(path = %adc.display(), "using application default credentials");
        let file: AdcFile = read_credential_file(adc)?;
        return Ok(file.into());
    }

    let client_secrets = content_dir.join(CLIENT_SECRETS_FILE);
    if client_secrets.exists() {
        tracing::info!(path = %client_secrets.display(), "using stored user credentials");
        let user = UserCredentials::load(&client_secrets, &content_dir.join(STORED_TOKEN_FILE))?;
        return Ok(CredentialSource::User(user));
    }

    Err(AuthError::NoCredentials {
        dir: content_dir.to_path_buf(),
    })
}

/// Reads and deserializes a JSON credential file.
pub(crate) fn read_credential_file<T>(path: &Path) -> Result<T, AuthError>
where
    T: serde::de::DeserializeOwned,
{
    let invalid = |reason: String| AuthError::CredentialFile {
        path: path.to_path_buf(),
        reason,
    };
    let text = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))
}
