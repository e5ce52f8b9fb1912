//! Authentication error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while obtaining credentials.
///
/// All of these are fatal at startup; nothing is retried.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential files were found.
    #[error(
        "No credentials found in '{}'. Provide service-account.json, or client-secrets.json \
         together with stored-token.json, or set GOOGLE_APPLICATION_CREDENTIALS.",
        dir.display()
    )]
    NoCredentials {
        /// The directory that was searched.
        dir: PathBuf,
    },

    /// A credential file could not be read or parsed.
    #[error("Invalid credential file '{}': {reason}", path.display())]
    CredentialFile {
        /// The offending file.
        path: PathBuf,
        /// Why the file was rejected.
        reason: String,
    },

    /// The service account assertion could not be signed.
    #[error("Failed to sign service account assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// The token endpoint rejected the request.
    #[error("Token request to {token_uri} failed with status {status}: {message}")]
    TokenRequestFailed {
        /// The token endpoint.
        token_uri: String,
        /// HTTP status code returned.
        status: u16,
        /// Response body returned.
        message: String,
    },

    /// The token endpoint returned an expiry that cannot be represented.
    #[error("Token endpoint {token_uri} returned an invalid expires_in: {expires_in}")]
    InvalidExpiry {
        /// The token endpoint.
        token_uri: String,
        /// Lifetime in seconds as returned.
        expires_in: i64,
    },

    /// The token endpoint could not be reached or returned garbage.
    #[error("Token request to {token_uri} failed: {source}")]
    Network {
        /// The token endpoint.
        token_uri: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}
