//! API endpoint resolution.
//!
//! Samples talk to the public Content API endpoint unless
//! [`ENDPOINT_ENV_VAR`] names another one, which is useful for pointing the
//! samples at a sandbox or a local fake.

use reqwest::Url;

use crate::error::ConfigError;

/// Environment variable holding an absolute endpoint override URL.
pub const ENDPOINT_ENV_VAR: &str = "GOOGLE_SHOPPING_SAMPLES_ENDPOINT";

/// Root URL of the public Content API.
pub const DEFAULT_ROOT_URL: &str = "https://shoppingcontent.googleapis.com/";

/// Service path of the Content API version the samples target.
pub const DEFAULT_SERVICE_PATH: &str = "content/v2.1/";

/// Where API requests are sent.
///
/// Request URLs are built as `root_url + service_path + relative path`.
///
/// # Example
///
/// ```rust
/// use shopping_samples::Endpoint;
///
/// let endpoint = Endpoint::parse("http://localhost:8080/content/v2.1").unwrap();
/// assert_eq!(endpoint.root_url(), "http://localhost:8080/");
/// assert_eq!(endpoint.service_path(), "content/v2.1/");
/// assert_eq!(
///     endpoint.url_for("123/products"),
///     "http://localhost:8080/content/v2.1/123/products"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    root_url: String,
    service_path: String,
    override_url: Option<String>,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            service_path: DEFAULT_SERVICE_PATH.to_string(),
            override_url: None,
        }
    }
}

impl Endpoint {
    /// Resolves the endpoint from an optional override URL, normally the
    /// value of [`ENDPOINT_ENV_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if `override_url` is not an
    /// absolute URL.
    pub fn resolve(override_url: Option<&str>) -> Result<Self, ConfigError> {
        override_url.map_or_else(|| Ok(Self::default()), Self::parse)
    }

    /// Builds an endpoint from an absolute URL.
    ///
    /// The root URL keeps the scheme, host and port; the URL path becomes
    /// the service path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if `url` is relative,
    /// unparsable, or has no host.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            url: url.to_string(),
            reason,
        };

        let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(invalid("URL has no host".to_string()));
        }

        let mut root = parsed.clone();
        root.set_path("/");
        root.set_query(None);
        root.set_fragment(None);

        let path = parsed.path().trim_start_matches('/');
        let service_path = if path.is_empty() || path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        };

        Ok(Self {
            root_url: root.to_string(),
            service_path,
            override_url: Some(url.to_string()),
        })
    }

    /// Returns the root URL, always ending in `/`.
    #[must_use]
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Returns the service path, empty or ending in `/`.
    #[must_use]
    pub fn service_path(&self) -> &str {
        &self.service_path
    }

    /// Returns the override URL this endpoint was built from, if any.
    #[must_use]
    pub fn override_url(&self) -> Option<&str> {
        self.override_url.as_deref()
    }

    /// Returns the absolute URL for a path relative to the service path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}{}", self.root_url, self.service_path, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_targets_public_api() {
        let endpoint = Endpoint::resolve(None).unwrap();
        assert_eq!(endpoint.override_url(), None);
        assert_eq!(
            endpoint.url_for("accounts/authinfo"),
            "https://shoppingcontent.googleapis.com/content/v2.1/accounts/authinfo"
        );
    }

    #[test]
    fn test_override_splits_root_and_service_path() {
        let endpoint = Endpoint::parse("https://sandbox.example.com:8443/content/v2.1/").unwrap();
        assert_eq!(endpoint.root_url(), "https://sandbox.example.com:8443/");
        assert_eq!(endpoint.service_path(), "content/v2.1/");
        assert_eq!(
            endpoint.override_url(),
            Some("https://sandbox.example.com:8443/content/v2.1/")
        );
    }

    #[test]
    fn test_override_without_path_has_empty_service_path() {
        let endpoint = Endpoint::parse("http://127.0.0.1:9000").unwrap();
        assert_eq!(endpoint.root_url(), "http://127.0.0.1:9000/");
        assert_eq!(endpoint.service_path(), "");
        assert_eq!(endpoint.url_for("1/products"), "http://127.0.0.1:9000/1/products");
    }

    #[test]
    fn test_override_drops_query_from_root() {
        let endpoint = Endpoint::parse("http://localhost/content?debug=1").unwrap();
        assert_eq!(endpoint.root_url(), "http://localhost/");
        assert_eq!(endpoint.service_path(), "content/");
    }

    #[test]
    fn test_relative_override_is_rejected() {
        let result = Endpoint::resolve(Some("content/v2.1"));
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_hostless_override_is_rejected() {
        let result = Endpoint::parse("localhost:8080/content");
        assert!(matches!(result, Err(ConfigError::InvalidEndpoint { .. })));
    }
}
