//! High-level client facade for the three public search operations.
//!
//! [`TokopediaClient`] orchestrates, per operation, the envelope builder
//! ([`operations`](crate::operations)), the transport
//! ([`GqlTransport`](crate::transport::GqlTransport)), and the matching
//! extractor ([`extract`](crate::extract)). For shop search it additionally
//! unions two independent pipelines by result identity.

use std::collections::HashSet;

use crate::error::Error;
use crate::extract;
use crate::model::{ProductResult, ShopResult};
use crate::operations;
use crate::transport::GqlTransport;

/// Client for Tokopedia's GraphQL search backend.
///
/// Stateless between calls: nothing is cached, retried, or remembered, so a
/// single instance is safe to invoke repeatedly and from multiple tasks at
/// once.
///
/// # Example
///
/// ```rust,ignore
/// use tokopedia_search::TokopediaClient;
///
/// let client = TokopediaClient::new();
///
/// let keywords = client.suggestions("sepatu").await?;
/// let shops = client.search_shops("sepatu").await?;
/// let products = client.search_shop_products(480552, "sepatu").await?;
/// ```
#[derive(Debug, Default)]
pub struct TokopediaClient {
    transport: GqlTransport,
}

// Verify TokopediaClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TokopediaClient>();
};

impl TokopediaClient {
    /// Creates a client targeting the production endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new() -> Self {
        Self {
            transport: GqlTransport::new(),
        }
    }

    /// Creates a client targeting a custom endpoint (tests, proxies).
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            transport: GqlTransport::with_endpoint(endpoint),
        }
    }

    /// Fetches autocomplete keyword suggestions for a search term.
    ///
    /// Returns the keywords in upstream encounter order, duplicates kept; an
    /// empty list when the upstream response carries no autocomplete block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the endpoint could not be reached, or
    /// [`Error::Parse`] if the response does not have the expected shape.
    pub async fn suggestions(&self, term: &str) -> Result<Vec<String>, Error> {
        tracing::debug!(term, "suggestions");
        let body = self.transport.post(operations::suggestion(term)).await?;
        Ok(extract::suggestions(&body)?)
    }

    /// Searches for shops matching a term.
    ///
    /// Aggregates two independent upstream queries: a direct shop search and
    /// a product search whose hits contribute their owning shops. The two
    /// round trips run back to back (both always happen, with no shared
    /// caching) and the results are unioned by the `(platform, id)` identity
    /// rule; on collision the direct shop-search copy is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] or [`Error::Parse`] if *either* round
    /// trip fails; there is no partial union from the surviving pipeline.
    pub async fn search_shops(&self, term: &str) -> Result<HashSet<ShopResult>, Error> {
        tracing::debug!(term, "search_shops");

        let body = self.transport.post(operations::shop_search(term)).await?;
        let mut shops = extract::shops(&body)?;

        let body = self
            .transport
            .post(operations::product_search(term))
            .await?;
        shops.extend(extract::shops_from_products(&body)?);

        Ok(shops)
    }

    /// Searches for products within one shop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the endpoint could not be reached, or
    /// [`Error::Parse`] if the response does not have the expected shape.
    pub async fn search_shop_products(
        &self,
        store_id: i64,
        term: &str,
    ) -> Result<HashSet<ProductResult>, Error> {
        tracing::debug!(store_id, term, "search_shop_products");
        let body = self
            .transport
            .post(operations::shop_products(store_id, term))
            .await?;
        Ok(extract::shop_products(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::GQL_ENDPOINT;

    #[test]
    fn test_client_defaults_to_production_endpoint() {
        let client = TokopediaClient::new();

        assert_eq!(client.transport.endpoint(), GQL_ENDPOINT);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokopediaClient>();
    }

    #[test]
    fn test_client_constructor_is_infallible() {
        // If this compiles, the constructor is infallible
        let _client: TokopediaClient = TokopediaClient::with_endpoint("http://127.0.0.1:9999/");
    }
}
