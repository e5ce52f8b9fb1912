//! Paginated list calls.
//!
//! List endpoints return a page of `resources` and an optional
//! `nextPageToken`. A [`ListCall`] remembers the request so the token can be
//! set on it and the call executed again.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError, HttpRequest};

/// Query parameter carrying the continuation token.
pub const PAGE_TOKEN_PARAM: &str = "pageToken";

/// One page of a list response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page; empty when the response had none.
    pub items: Vec<T>,
    /// Continuation token, `None` on the last page.
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Builds a page from the raw optional fields of a list response.
    ///
    /// An empty token is treated as absent.
    #[must_use]
    pub fn new(items: Option<Vec<T>>, next_page_token: Option<String>) -> Self {
        Self {
            items: items.unwrap_or_default(),
            next_page_token: next_page_token.filter(|token| !token.is_empty()),
        }
    }
}

/// A list response that can be split into a [`Page`].
pub trait ListResponse: DeserializeOwned {
    /// The listed resource type.
    type Item;

    /// Splits the response into its items and continuation token.
    fn into_page(self) -> Page<Self::Item>;
}

/// A list request that can be executed repeatedly with different page tokens.
#[derive(Debug)]
pub struct ListCall<'a, R> {
    client: &'a HttpClient,
    request: HttpRequest,
    response: PhantomData<fn() -> R>,
}

impl<'a, R: ListResponse> ListCall<'a, R> {
    /// Creates a list call for `request`.
    #[must_use]
    pub const fn new(client: &'a HttpClient, request: HttpRequest) -> Self {
        Self {
            client,
            request,
            response: PhantomData,
        }
    }

    /// Returns the page token the next execution will send.
    #[must_use]
    pub fn page_token(&self) -> Option<&str> {
        self.request.query.get(PAGE_TOKEN_PARAM).map(String::as_str)
    }

    /// Sets the page token for the next execution.
    pub fn set_page_token(&mut self, token: impl Into<String>) {
        self.request.set_query_param(PAGE_TOKEN_PARAM, token);
    }

    /// Returns the underlying request.
    #[must_use]
    pub const fn request(&self) -> &HttpRequest {
        &self.request
    }

    /// Fetches one page.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the body does not decode.
    pub async fn execute(&self) -> Result<R, HttpError> {
        self.client.get(&self.request).await?.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_missing_items_to_empty() {
        let page: Page<u8> = Page::new(None, Some("t".to_string()));
        assert!(page.items.is_empty());
        assert_eq!(page.next_page_token.as_deref(), Some("t"));
    }

    #[test]
    fn test_page_treats_empty_token_as_absent() {
        let page = Page::new(Some(vec![1, 2]), Some(String::new()));
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.next_page_token, None);
    }
}
