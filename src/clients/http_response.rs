//! HTTP response types for the Shopping samples.

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;

/// A successful HTTP response from the Content API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The path the request was sent to, relative to the service path.
    pub path: String,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Deserializes the body.
    ///
    /// An empty body is treated as `{}` so that list responses without any
    /// members still decode.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        let body = if self.body.trim().is_empty() {
            "{}"
        } else {
            &self.body
        };
        serde_json::from_str(body).map_err(|source| HttpError::Decode {
            path: self.path.clone(),
            source,
        })
    }
}
