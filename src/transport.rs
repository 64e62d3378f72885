//! HTTP transport for delivering request envelopes to the GraphQL endpoint.
//!
//! This module provides [`GqlTransport`], the only component in the crate
//! that touches the network. It performs exactly one POST per invocation and
//! hands back the raw response body as text; interpreting the body is the
//! extractor's job.

use thiserror::Error;

/// The fixed production GraphQL endpoint.
pub const GQL_ENDPOINT: &str = "https://gql.tokopedia.com/";

/// Constant `referer` header value expected by the upstream service.
const REFERER: &str = "https://www.tokopedia.com/";

/// Error type for transport failures.
///
/// Raised only when no response body could be obtained. Responses with error
/// status codes still yield a body and are *not* transport errors; the
/// extractor fails on them instead when the expected JSON shape is missing.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The network call could not complete (unreachable endpoint, connection
    /// reset, body read failure).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Transport for the fixed upstream GraphQL endpoint.
///
/// Sends serialized request envelopes via POST with the constant `referer`
/// header and returns the raw UTF-8 response body. One external call per
/// invocation; the underlying connection is acquired and released per call
/// on every exit path, including failure. No retries, no caching, no
/// concurrency coordination.
///
/// # Thread Safety
///
/// `GqlTransport` is `Send + Sync` and holds no mutable state, so it is safe
/// to share across concurrent calls.
#[derive(Debug)]
pub struct GqlTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Target endpoint URL.
    endpoint: String,
}

// Verify GqlTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GqlTransport>();
};

impl GqlTransport {
    /// Creates a transport targeting the production endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(GQL_ENDPOINT)
    }

    /// Creates a transport targeting a custom endpoint.
    ///
    /// Intended for tests and proxy setups; production callers should use
    /// [`new`](Self::new).
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint this transport targets.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one request envelope and returns the raw response body.
    ///
    /// The envelope is sent as-is: builders that interpolate the term raw
    /// can produce bodies that are not well-formed JSON, and those are still
    /// delivered unchanged. The response body is returned for any HTTP
    /// status; remote error signaling is deferred to extraction.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the endpoint is unreachable or
    /// the body could not be read.
    pub async fn post(&self, envelope: String) -> Result<String, TransportError> {
        tracing::trace!(envelope = %envelope, "sending request envelope");

        let response = self
            .client
            .post(&self.endpoint)
            .header("referer", REFERER)
            .header("content-type", "application/json")
            .body(envelope)
            .send()
            .await?;

        let body = response.text().await?;
        tracing::trace!(body = %body, "received response body");

        Ok(body)
    }
}

impl Default for GqlTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_defaults_to_production_endpoint() {
        let transport = GqlTransport::new();

        assert_eq!(transport.endpoint(), GQL_ENDPOINT);
    }

    #[test]
    fn test_transport_endpoint_override() {
        let transport = GqlTransport::with_endpoint("http://127.0.0.1:9999/");

        assert_eq!(transport.endpoint(), "http://127.0.0.1:9999/");
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GqlTransport>();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        // Port 1 is reserved and nothing listens on it.
        let transport = GqlTransport::with_endpoint("http://127.0.0.1:1/");

        let result = transport.post("[]".to_string()).await;

        assert!(matches!(result, Err(TransportError::Network(_))));
    }
}
