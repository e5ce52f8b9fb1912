//! User credentials backed by a stored refresh token.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::auth::credential::{request_token, GOOGLE_TOKEN_URI};
use crate::auth::{read_credential_file, AuthError, Credential};

/// Shape of `client-secrets.json` as downloaded from the API console.
#[derive(Debug, Deserialize)]
struct ClientSecretsFile {
    installed: Option<ClientSecrets>,
    web: Option<ClientSecrets>,
}

#[derive(Debug, Deserialize)]
struct ClientSecrets {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    token_uri: Option<String>,
}

/// Shape of `stored-token.json`.
#[derive(Deserialize)]
struct StoredToken {
    refresh_token: String,
}

/// An OAuth client plus the refresh token a user granted it.
///
/// Also the shape of an `authorized_user` application default credentials
/// file. The `Debug` implementation masks the secrets.
#[derive(Clone, Deserialize)]
pub struct UserCredentials {
    client_id: String,
    client_secret: String,
    refresh_token: String,
    #[serde(default)]
    token_uri: Option<String>,
}

impl UserCredentials {
    /// Loads an OAuth client from `client_secrets` and the refresh token
    /// from `stored_token`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialFile`] if either file is unreadable,
    /// malformed, or the client secrets have neither an `installed` nor a
    /// `web` section.
    pub fn load(client_secrets: &Path, stored_token: &Path) -> Result<Self, AuthError> {
        let secrets: ClientSecretsFile = read_credential_file(client_secrets)?;
        let client = secrets
            .installed
            .or(secrets.web)
            .ok_or_else(|| AuthError::CredentialFile {
                path: client_secrets.to_path_buf(),
                reason: "expected an 'installed' or 'web' client section".to_string(),
            })?;
        let token: StoredToken = read_credential_file(stored_token)?;

        Ok(Self {
            client_id: client.client_id,
            client_secret: client.client_secret,
            refresh_token: token.refresh_token,
            token_uri: client.token_uri,
        })
    }

    /// Returns the OAuth client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the token endpoint, or Google's default.
    #[must_use]
    pub fn token_uri(&self) -> &str {
        self.token_uri.as_deref().unwrap_or(GOOGLE_TOKEN_URI)
    }

    /// Redeems the refresh token for an access token.
    pub(crate) async fn fetch_token(
        &self,
        client: &reqwest::Client,
    ) -> Result<Credential, AuthError> {
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", self.refresh_token.as_str()),
        ];
        request_token(client, self.token_uri(), &form).await
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"*****")
            .field("refresh_token", &"*****")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_installed_client() {
        let dir = TempDir::new().unwrap();
        let secrets = write(
            &dir,
            "client-secrets.json",
            r#"{"installed": {"client_id": "id-1", "client_secret": "s", "token_uri": "http://t/token"}}"#,
        );
        let token = write(&dir, "stored-token.json", r#"{"refresh_token": "r"}"#);

        let credentials = UserCredentials::load(&secrets, &token).unwrap();
        assert_eq!(credentials.client_id(), "id-1");
        assert_eq!(credentials.token_uri(), "http://t/token");
    }

    #[test]
    fn test_load_web_client_uses_default_token_uri() {
        let dir = TempDir::new().unwrap();
        let secrets = write(
            &dir,
            "client-secrets.json",
            r#"{"web": {"client_id": "id-2", "client_secret": "s"}}"#,
        );
        let token = write(&dir, "stored-token.json", r#"{"refresh_token": "r"}"#);

        let credentials = UserCredentials::load(&secrets, &token).unwrap();
        assert_eq!(credentials.client_id(), "id-2");
        assert_eq!(credentials.token_uri(), GOOGLE_TOKEN_URI);
    }

    #[test]
    fn test_load_rejects_secrets_without_client_section() {
        let dir = TempDir::new().unwrap();
        let secrets = write(&dir, "client-secrets.json", "{}");
        let token = write(&dir, "stored-token.json", r#"{"refresh_token": "r"}"#);

        let result = UserCredentials::load(&secrets, &token);
        assert!(matches!(result, Err(AuthError::CredentialFile { path, .. }) if path == secrets));
    }

    #[test]
    fn test_load_rejects_token_without_refresh_token() {
        let dir = TempDir::new().unwrap();
        let secrets = write(
            &dir,
            "client-secrets.json",
            r#"{"installed": {"client_id": "id", "client_secret": "s"}}"#,
        );
        let token = write(&dir, "stored-token.json", r#"{"access_token": "a"}"#);

        let result = UserCredentials::load(&secrets, &token);
        assert!(matches!(result, Err(AuthError::CredentialFile { path, .. }) if path == token));
    }

    #[test]
    fn test_debug_masks_secrets() {
        let credentials: UserCredentials = serde_json::from_str(
            r#"{"client_id": "id", "client_secret": "shh", "refresh_token": "1//refresh"}"#,
        )
        .unwrap();
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("shh"));
        assert!(!debug.contains("1//refresh"));
    }
}
