//! HTTP request types for the Shopping samples.
//!
//! All Content API calls the samples make are `GET`s, so a request is just
//! a path relative to the service path plus query parameters.

use std::collections::BTreeMap;

/// A request to be sent to the Content API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use shopping_samples::clients::HttpRequest;
///
/// let request = HttpRequest::builder("1234/products")
///     .query_param("maxResults", "250")
///     .build();
///
/// assert_eq!(request.path, "1234/products");
/// assert_eq!(request.query.get("maxResults").map(String::as_str), Some("250"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The path (relative to the service path) for this request.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: BTreeMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for a request to `path`.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }

    /// Sets or replaces a query parameter in place.
    pub fn set_query_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.insert(key.into(), value.into());
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: BTreeMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            path: self.path,
            query: self.query,
        }
    }
}
