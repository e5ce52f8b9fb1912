//! Typed Content API client.
//!
//! [`ContentService`] wraps an [`HttpClient`] and exposes the handful of
//! Content API v2.1 calls the samples use. List calls return a [`ListCall`]
//! so callers can page through results.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopping_samples::content::ContentService;
//!
//! let service = ContentService::new(client);
//! let authinfo = service.authinfo().await?;
//! let mut call = service.list_products(merchant_id);
//! let page = call.execute().await?;
//! ```

pub mod model;
mod pagination;

pub use model::{
    Account, AccountIdentifier, AccountsAuthInfoResponse, AccountsListResponse, Datafeed,
    DatafeedsListResponse, Product, ProductsListResponse, Warning,
};
pub use pagination::{ListCall, ListResponse, Page, PAGE_TOKEN_PARAM};

use crate::clients::{HttpClient, HttpError, HttpRequest};
use crate::config::MerchantId;

/// Client for the Content API.
#[derive(Debug)]
pub struct ContentService {
    client: HttpClient,
}

// Verify ContentService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ContentService>();
};

impl ContentService {
    /// Creates a service on top of an HTTP client.
    #[must_use]
    pub const fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// `accounts.authinfo`: lists the accounts the authenticated user can access.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn authinfo(&self) -> Result<AccountsAuthInfoResponse, HttpError> {
        let request = HttpRequest::builder("accounts/authinfo").build();
        self.client.get(&request).await?.json()
    }

    /// `accounts.get`: fetches account `account_id` as seen by `merchant_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_account(
        &self,
        merchant_id: MerchantId,
        account_id: MerchantId,
    ) -> Result<Account, HttpError> {
        let request = HttpRequest::builder(format!("{merchant_id}/accounts/{account_id}")).build();
        self.client.get(&request).await?.json()
    }

    /// `accounts.list`: lists the sub-accounts of an MCA.
    #[must_use]
    pub fn list_accounts(&self, merchant_id: MerchantId) -> ListCall<'_, AccountsListResponse> {
        let request = HttpRequest::builder(format!("{merchant_id}/accounts")).build();
        ListCall::new(&self.client, request)
    }

    /// `products.list`: lists the products of a merchant.
    #[must_use]
    pub fn list_products(&self, merchant_id: MerchantId) -> ListCall<'_, ProductsListResponse> {
        let request = HttpRequest::builder(format!("{merchant_id}/products")).build();
        ListCall::new(&self.client, request)
    }

    /// `products.get`: fetches a single product by REST ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get_product(
        &self,
        merchant_id: MerchantId,
        product_id: &str,
    ) -> Result<Product, HttpError> {
        let product_id = urlencoding::encode(product_id);
        let request = HttpRequest::builder(format!("{merchant_id}/products/{product_id}")).build();
        self.client.get(&request).await?.json()
    }

    /// `datafeeds.list`: lists the datafeeds of a merchant.
    #[must_use]
    pub fn list_datafeeds(&self, merchant_id: MerchantId) -> ListCall<'_, DatafeedsListResponse> {
        let request = HttpRequest::builder(format!("{merchant_id}/datafeeds")).build();
        ListCall::new(&self.client, request)
    }
}
