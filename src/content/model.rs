//! Content API resource types.
//!
//! Only the fields the samples print are modelled; everything else in the
//! JSON is ignored.

use serde::Deserialize;

use crate::config::MerchantId;
use crate::content::pagination::{ListResponse, Page};

/// A non-fatal, service-supplied annotation attached to a returned item.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    /// Error domain.
    #[serde(default)]
    pub domain: Option<String>,
    /// Machine-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

/// A product in a merchant's catalog.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// REST ID, `channel:contentLanguage:targetCountry:offerId`.
    #[serde(default)]
    pub id: Option<String>,
    /// Merchant-supplied identifier.
    #[serde(default)]
    pub offer_id: Option<String>,
    /// Product title.
    #[serde(default)]
    pub title: Option<String>,
    /// Warnings attached by the service.
    #[serde(default)]
    pub warnings: Option<Vec<Warning>>,
}

/// Response of `products.list`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsListResponse {
    /// Token for the next page, absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Products on this page.
    #[serde(default)]
    pub resources: Option<Vec<Product>>,
}

impl ListResponse for ProductsListResponse {
    type Item = Product;

    fn into_page(self) -> Page<Product> {
        Page::new(self.resources, self.next_page_token)
    }
}

/// A datafeed configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Datafeed {
    /// Datafeed ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Descriptive name.
    #[serde(default)]
    pub name: Option<String>,
    /// Name of the uploaded or fetched file.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Content type, e.g. `products`.
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Response of `datafeeds.list`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatafeedsListResponse {
    /// Token for the next page, absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Datafeeds on this page.
    #[serde(default)]
    pub resources: Option<Vec<Datafeed>>,
}

impl ListResponse for DatafeedsListResponse {
    type Item = Datafeed;

    fn into_page(self) -> Page<Datafeed> {
        Page::new(self.resources, self.next_page_token)
    }
}

/// A Merchant Center account.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Merchant ID.
    #[serde(default)]
    pub id: Option<MerchantId>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Store website.
    #[serde(default)]
    pub website_url: Option<String>,
}

/// Response of `accounts.list`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsListResponse {
    /// Token for the next page, absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Sub-accounts on this page.
    #[serde(default)]
    pub resources: Option<Vec<Account>>,
}

impl ListResponse for AccountsListResponse {
    type Item = Account;

    fn into_page(self) -> Page<Account> {
        Page::new(self.resources, self.next_page_token)
    }
}

/// An account the authenticated user can access.
///
/// For a standalone account only `merchant_id` is set. For an MCA the
/// `aggregator_id` is set, and `merchant_id` too when the user only has
/// access to one sub-account.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdentifier {
    /// Aggregator (MCA) ID.
    #[serde(default)]
    pub aggregator_id: Option<MerchantId>,
    /// Merchant ID.
    #[serde(default)]
    pub merchant_id: Option<MerchantId>,
}

/// Response of `accounts.authinfo`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsAuthInfoResponse {
    /// Accounts the authenticated user can access.
    #[serde(default)]
    pub account_identifiers: Vec<AccountIdentifier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_page_with_warnings() {
        let response: ProductsListResponse = serde_json::from_value(serde_json::json!({
            "kind": "content#productsListResponse",
            "nextPageToken": "abc",
            "resources": [{
                "id": "online:en:US:sku-1",
                "offerId": "sku-1",
                "title": "Blue shirt",
                "warnings": [{"domain": "content.ContentErrorDomain", "reason": "validation", "message": "missing gtin"}]
            }]
        }))
        .unwrap();

        let page = response.into_page();
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
        assert_eq!(page.items.len(), 1);
        let product = &page.items[0];
        assert_eq!(product.offer_id.as_deref(), Some("sku-1"));
        assert_eq!(
            product.warnings.as_ref().unwrap()[0].reason.as_deref(),
            Some("validation")
        );
    }

    #[test]
    fn test_authinfo_identifiers_parse_string_ids() {
        let response: AccountsAuthInfoResponse = serde_json::from_value(serde_json::json!({
            "accountIdentifiers": [
                {"aggregatorId": "100"},
                {"merchantId": "200", "aggregatorId": "100"}
            ]
        }))
        .unwrap();

        assert_eq!(response.account_identifiers.len(), 2);
        assert_eq!(
            response.account_identifiers[0].aggregator_id,
            Some(MerchantId::new(100).unwrap())
        );
        assert_eq!(response.account_identifiers[0].merchant_id, None);
        assert_eq!(
            response.account_identifiers[1].merchant_id,
            Some(MerchantId::new(200).unwrap())
        );
    }

    #[test]
    fn test_empty_authinfo() {
        let response: AccountsAuthInfoResponse = serde_json::from_str("{}").unwrap();
        assert!(response.account_identifiers.is_empty());
    }
}
