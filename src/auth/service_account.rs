//! Service account credentials.
//!
//! A service account key file is exchanged for an access token by signing a
//! short-lived RS256 JWT assertion with the key and posting it to the token
//! endpoint using the JWT bearer grant.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::auth::credential::{request_token, GOOGLE_TOKEN_URI};
use crate::auth::{AuthError, Credential};

/// Grant type for exchanging a signed assertion.
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the assertion.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// The subset of a service account key file the samples need.
///
/// The `Debug` implementation masks the private key.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    #[serde(default)]
    private_key_id: Option<String>,
    #[serde(default)]
    token_uri: Option<String>,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

impl ServiceAccountKey {
    /// Returns the service account email address.
    #[must_use]
    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Returns the token endpoint named in the key file, or Google's default.
    #[must_use]
    pub fn token_uri(&self) -> &str {
        self.token_uri.as_deref().unwrap_or(GOOGLE_TOKEN_URI)
    }

    /// Signs a JWT assertion requesting `scope`, issued at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Signing`] if the private key is not a valid RSA
    /// PEM key.
    pub fn assertion(&self, scope: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope,
            aud: self.token_uri(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ASSERTION_LIFETIME_SECS)).timestamp(),
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid.clone_from(&self.private_key_id);

        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        Ok(jsonwebtoken::encode(&header, &claims, &key)?)
    }

    /// Exchanges a fresh assertion for an access token.
    pub(crate) async fn fetch_token(
        &self,
        client: &reqwest::Client,
        scope: &str,
    ) -> Result<Credential, AuthError> {
        let assertion = self.assertion(scope, Utc::now())?;
        let form = [
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("assertion", assertion.as_str()),
        ];
        request_token(client, self.token_uri(), &form).await
    }
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"*****")
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
