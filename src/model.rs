//! Domain entities for search results.
//!
//! This module contains the value types produced by response extraction:
//! [`ShopResult`] for storefronts and [`ProductResult`] for product listings,
//! both tagged with the originating [`Platform`].
//!
//! # Identity
//!
//! Equality and hashing for both result types depend only on the
//! `(platform, id)` pair. The `name` and `url` fields (and `price`/`image`
//! for products) are carried data, not identity: two results for the same
//! shop obtained from different queries with differing display strings are
//! the same entity for deduplication purposes. Inserting into a `HashSet`
//! therefore keeps whichever copy arrived first.
//!
//! All types here are immutable value snapshots; nothing is mutated after
//! construction and nothing is persisted.

use std::hash::{Hash, Hasher};

use serde::Serialize;

/// The marketplace a result originates from.
///
/// Currently only Tokopedia is supported. The enum is `#[non_exhaustive]`
/// so additional marketplaces can be added without breaking consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum Platform {
    /// The Tokopedia marketplace (`tokopedia.com`).
    Tokopedia,
}

/// A seller/storefront returned by shop search.
///
/// # Identity
///
/// Two `ShopResult` values are equal iff `platform` and `id` match; see the
/// [module docs](self) for the deduplication consequences.
///
/// # Example
///
/// ```rust
/// use tokopedia_search::{Platform, ShopResult};
///
/// let a = ShopResult::new(Platform::Tokopedia, 1, "Shop", "https://s.example");
/// let b = ShopResult::new(Platform::Tokopedia, 1, "Renamed Shop", "https://other.example");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ShopResult {
    /// The marketplace this shop belongs to.
    pub platform: Platform,
    /// Platform-scoped shop id.
    pub id: i64,
    /// Display name of the shop.
    pub name: String,
    /// Shop page URL.
    pub url: String,
}

impl ShopResult {
    /// Creates a new shop result.
    #[must_use]
    pub fn new(
        platform: Platform,
        id: i64,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            id,
            name: name.into(),
            url: url.into(),
        }
    }
}

impl PartialEq for ShopResult {
    fn eq(&self, other: &Self) -> bool {
        self.platform == other.platform && self.id == other.id
    }
}

impl Eq for ShopResult {}

impl Hash for ShopResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.platform.hash(state);
        self.id.hash(state);
    }
}

/// A product listing returned by per-shop product search.
///
/// The `id`, `name`, and `url` fields describe the *product*, not the shop;
/// product ids live in their own id space. The identity rule is the same
/// shape as [`ShopResult`]'s (`(platform, id)`), but the two types are
/// deliberately unrelated: the overlap is structural, not a subtype
/// relationship.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResult {
    /// The marketplace this product is listed on.
    pub platform: Platform,
    /// Platform-scoped product id.
    pub id: i64,
    /// Display name of the product.
    pub name: String,
    /// Product page URL.
    pub url: String,
    /// Localized, pre-formatted price text (e.g. `"Rp10.000"`).
    ///
    /// The upstream service sends display strings, not numbers, so this is
    /// deliberately not a numeric type.
    pub price: String,
    /// URL of the primary product image.
    pub image: String,
}

impl ProductResult {
    /// Creates a new product result.
    #[must_use]
    pub fn new(
        platform: Platform,
        id: i64,
        name: impl Into<String>,
        url: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            platform,
            id,
            name: name.into(),
            url: url.into(),
            price: price.into(),
            image: image.into(),
        }
    }
}

impl PartialEq for ProductResult {
    fn eq(&self, other: &Self) -> bool {
        self.platform == other.platform && self.id == other.id
    }
}

impl Eq for ProductResult {}

impl Hash for ProductResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.platform.hash(state);
        self.id.hash(state);
    }
}
