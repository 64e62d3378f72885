//! # Tokopedia Search Client
//!
//! A read-only Rust client for Tokopedia's GraphQL search backend,
//! aggregating autocomplete suggestions, shop search, and per-shop product
//! search over `https://gql.tokopedia.com/`.
//!
//! ## Overview
//!
//! This crate provides:
//! - Typed result entities with `(platform, id)` identity semantics via
//!   [`ShopResult`] and [`ProductResult`]
//! - Deterministic request envelope construction for the four upstream
//!   GraphQL operations via [`operations`]
//! - A minimal POST transport with the fixed upstream headers via
//!   [`transport::GqlTransport`]
//! - Fail-fast response extraction with path-tracked parse errors via
//!   [`extract`]
//! - A stateless async facade, [`TokopediaClient`], wiring the above
//!   together
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tokopedia_search::TokopediaClient;
//!
//! let client = TokopediaClient::new();
//!
//! // Autocomplete keywords, in upstream order
//! let keywords = client.suggestions("sepatu").await?;
//!
//! // Shops matching a term, aggregated from two upstream queries and
//! // deduplicated by shop identity
//! let shops = client.search_shops("sepatu").await?;
//!
//! // Products within one shop
//! let products = client.search_shop_products(480552, "sepatu").await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation fails in exactly one of two ways, surfaced through
//! [`Error`]: the endpoint could not be reached
//! ([`Error::Transport`]), or the response did not match the expected shape
//! ([`Error::Parse`]). There are no retries, fallbacks, or partial results.
//!
//! ## Design Principles
//!
//! - **No global state**: clients are instance-based; the JSON parser is
//!   invoked per call and is fully reentrant
//! - **Fail-fast extraction**: a missing field aborts the whole call rather
//!   than yielding a silently incomplete entity
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Immutable results**: extracted collections are value snapshots,
//!   never live views

pub mod client;
pub mod error;
pub mod extract;
pub mod model;
pub mod operations;
pub mod transport;

// Re-export public types at crate root for convenience
pub use client::TokopediaClient;
pub use error::Error;
pub use extract::ParseError;
pub use model::{Platform, ProductResult, ShopResult};
pub use transport::{GqlTransport, TransportError, GQL_ENDPOINT};
