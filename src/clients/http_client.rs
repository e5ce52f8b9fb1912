//! HTTP client for Content API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Content API, plus the transport factory shared with the
//! authenticator.

use crate::auth::Authenticator;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::Endpoint;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the `User-Agent` sent with every request.
#[must_use]
pub fn user_agent() -> String {
    format!("shopping-samples/{SDK_VERSION} (Rust)")
}

/// Builds the HTTPS transport used for API and token requests.
///
/// # Errors
///
/// Returns the underlying [`reqwest::Error`] if TLS initialization fails.
pub fn create_transport() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(user_agent())
        .build()
}

/// HTTP client for making requests to the Content API.
///
/// The client handles:
/// - URL construction from the [`Endpoint`]
/// - Bearer token injection, refreshing via the [`Authenticator`]
/// - Classification of non-2xx responses into [`HttpResponseError`]
///
/// Requests are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopping_samples::clients::{create_transport, HttpClient, HttpRequest};
/// use shopping_samples::config::{Endpoint, ENDPOINT_ENV_VAR};
///
/// let transport = create_transport()?;
/// let endpoint = Endpoint::resolve(std::env::var(ENDPOINT_ENV_VAR).ok().as_deref())?;
/// let client = HttpClient::new(transport, endpoint, authenticator);
/// let response = client.get(&HttpRequest::builder("accounts/authinfo").build()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: Endpoint,
    authenticator: Authenticator,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    #[must_use]
    pub const fn new(
        client: reqwest::Client,
        endpoint: Endpoint,
        authenticator: Authenticator,
    ) -> Self {
        Self {
            client,
            endpoint,
            authenticator,
        }
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Sends a `GET` request to the Content API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - No access token can be obtained (`Auth`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.endpoint.url_for(&request.path);
        let token = self.authenticator.access_token().await?;

        tracing::debug!(%url, query = ?request.query, "sending request");
        let res = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&request.query)
            .send()
            .await?;

        let code = res.status().as_u16();
        let body = res.text().await?;
        tracing::debug!(%url, code, "received response");

        let response = HttpResponse::new(code, request.path.clone(), body);
        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError::from_body(
            code,
            &response.body,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{CredentialSource, UserCredentials};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> HttpClient {
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "test-token",
                "expires_in": 3600,
            })))
            .mount(server)
            .await;

        let user: UserCredentials = serde_json::from_value(serde_json::json!({
            "client_id": "c",
            "client_secret": "s",
            "refresh_token": "r",
            "token_uri": format!("{}/token", server.uri()),
        }))
        .unwrap();
        let transport = create_transport().unwrap();
        let authenticator = Authenticator::new(CredentialSource::User(user), transport.clone());
        let endpoint = Endpoint::parse(&format!("{}/content/v2.1", server.uri())).unwrap();
        HttpClient::new(transport, endpoint, authenticator)
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(user_agent().starts_with("shopping-samples/"));
    }

    #[tokio::test]
    async fn test_get_sends_bearer_token_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/v2.1/1/products"))
            .and(query_param("maxResults", "5"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"kind": "x"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let request = HttpRequest::builder("1/products")
            .query_param("maxResults", "5")
            .build();
        let response = client.get(&request).await.unwrap();

        assert_eq!(response.code, 200);
        assert_eq!(response.path, "1/products");
    }

    #[tokio::test]
    async fn test_get_classifies_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/content/v2.1/1/products/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {
                    "code": 404,
                    "message": "item not found",
                    "errors": [{"domain": "global", "reason": "notFound", "message": "item not found"}]
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let result = client
            .get(&HttpRequest::builder("1/products/missing").build())
            .await;

        match result {
            Err(HttpError::Response(error)) => {
                assert_eq!(error.code, 404);
                let details = error.client_error_details().unwrap();
                assert_eq!(details.errors[0].reason.as_deref(), Some("notFound"));
            }
            other => panic!("expected Response error, got {other:?}"),
        }
    }
}
