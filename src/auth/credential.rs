//! OAuth2 access tokens and the token endpoint exchange.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthError;

/// Default Google OAuth2 token endpoint.
pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Tokens this close to expiry are treated as already expired.
const EXPIRY_SKEW_SECS: i64 = 60;

/// An OAuth2 access token used to sign API requests.
///
/// The `Debug` implementation masks the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    /// Creates a credential from a raw access token.
    #[must_use]
    pub fn new(access_token: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at,
        }
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns when the token expires, if the token endpoint said so.
    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns `true` if the token is expired or about to expire.
    ///
    /// Tokens without an expiry never expire.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires| Utc::now() + Duration::seconds(EXPIRY_SKEW_SECS) >= expires)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"*****")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Successful response from an OAuth2 token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl TokenResponse {
    fn into_credential(self, token_uri: &str) -> Result<Credential, AuthError> {
        let expires_at = match self.expires_in {
            Some(seconds) => Some(
                Duration::try_seconds(seconds)
                    .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
                    .ok_or_else(|| AuthError::InvalidExpiry {
                        token_uri: token_uri.to_string(),
                        expires_in: seconds,
                    })?,
            ),
            None => None,
        };
        Ok(Credential::new(self.access_token, expires_at))
    }
}

/// Posts a form-encoded grant to `token_uri` and returns the issued token.
pub(crate) async fn request_token<F>(
    client: &reqwest::Client,
    token_uri: &str,
    form: &F,
) -> Result<Credential, AuthError>
where
    F: Serialize + ?Sized,
{
    let network = |source| AuthError::Network {
        token_uri: token_uri.to_string(),
        source,
    };

    tracing::debug!(token_uri, "requesting access token");
    let response = client
        .post(token_uri)
        .form(form)
        .send()
        .await
        .map_err(network)?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AuthError::TokenRequestFailed {
            token_uri: token_uri.to_string(),
            status: status.as_u16(),
            message,
        });
    }

    let token: TokenResponse = response.json().await.map_err(network)?;
    token.into_credential(token_uri)
}

// Verify Credential is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credential>();
};
