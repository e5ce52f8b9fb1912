//! HTTP client types for Content API communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! the Content API. It handles URL construction, bearer tokens, and the
//! decoding of structured Google JSON errors.
//!
//! # Overview
//!
//! - [`create_transport`]: Builds the rustls-backed HTTPS transport
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A successful response from the API
//! - [`HttpError`]: Unified error type, with [`GoogleJsonError`] details for
//!   structured API errors
//!
//! # Retry Behavior
//!
//! None. A failed request is reported to the caller as-is.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ErrorInfo, GoogleJsonError, HttpError, HttpResponseError};
pub use http_client::{create_transport, user_agent, HttpClient, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
