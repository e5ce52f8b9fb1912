//! HTTP-specific error types for the Shopping samples.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API, carrying the
//!   structured [`GoogleJsonError`] when the body had one
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shopping_samples::clients::HttpError;
//!
//! match client.get(&request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) if e.client_error_details().is_some() => {
//!         println!("API rejected the request with {}", e.code);
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::auth::AuthError;

/// A single entry of a structured Google API error.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    /// Error domain, e.g. `global`.
    #[serde(default)]
    pub domain: Option<String>,
    /// Machine-readable reason, e.g. `invalid`.
    #[serde(default)]
    pub reason: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Structured error body returned by Google APIs.
///
/// Google APIs wrap this in an `error` member:
///
/// ```json
/// {"error": {"code": 400, "message": "...", "errors": [{"reason": "invalid", "message": "..."}]}}
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct GoogleJsonError {
    /// HTTP status code echoed in the body.
    pub code: u16,
    /// Summary message.
    #[serde(default)]
    pub message: String,
    /// Individual error entries.
    #[serde(default)]
    pub errors: Vec<ErrorInfo>,
}

#[derive(Deserialize)]
struct GoogleJsonErrorEnvelope {
    error: GoogleJsonError,
}

impl GoogleJsonError {
    /// Parses the structured error out of a response body.
    ///
    /// Returns `None` if the body is not a JSON error envelope.
    #[must_use]
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<GoogleJsonErrorEnvelope>(body)
            .ok()
            .map(|envelope| envelope.error)
    }
}

/// Error returned when an HTTP request receives a non-successful response.
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The structured error summary, or the raw body when not JSON.
    pub message: String,
    /// The structured error, when the body carried one.
    pub details: Option<GoogleJsonError>,
}

impl HttpResponseError {
    /// Builds an error from a status code and raw response body.
    #[must_use]
    pub fn from_body(code: u16, body: &str) -> Self {
        let details = GoogleJsonError::from_body(body);
        let message = details
            .as_ref()
            .map_or_else(|| body.to_string(), |d| d.message.clone());
        Self {
            code,
            message,
            details,
        }
    }

    /// Returns the structured error if it reports a 4xx code.
    #[must_use]
    pub fn client_error_details(&self) -> Option<&GoogleJsonError> {
        self.details
            .as_ref()
            .filter(|details| (400..500).contains(&details.code))
    }
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A request could not be signed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A successful response body did not match the expected shape.
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        /// The request path.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
