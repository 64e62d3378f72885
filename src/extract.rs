//! Response extraction for the upstream GraphQL operations.
//!
//! Four pure functions, one per operation, each navigating a hard-coded
//! path through the parsed response document and materializing domain
//! entities. The response is expected to be a JSON array mirroring the
//! request envelope (always exactly one element in this system), with each
//! element's `data` field shaped by the operation's selection set.
//!
//! # Failure policy
//!
//! There is no partial-result recovery: absence of any expected key or array
//! at any navigation step, or a value of the wrong shape (e.g. a non-integer
//! id), aborts the whole extraction with a [`ParseError`] naming the
//! offending path. Fields outside the navigated path are ignored.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::model::{Platform, ProductResult, ShopResult};

/// Error type for response parsing failures.
///
/// Every variant carries enough context to locate the problem in the raw
/// response: either the JSON syntax error itself or the path of the
/// offending value.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response body is not well-formed JSON.
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// An expected key or value was absent.
    #[error("missing `{path}` in response")]
    MissingField {
        /// Path of the absent value, e.g. `$[0].data.aceSearchShop.shops`.
        path: String,
    },

    /// A value was present but had the wrong JSON type.
    #[error("`{path}` is not {expected} (found {found})")]
    UnexpectedShape {
        /// Path of the offending value.
        path: String,
        /// Description of the expected type.
        expected: &'static str,
        /// JSON type that was actually found.
        found: &'static str,
    },
}

/// A position inside the parsed response, carrying the path taken to reach
/// it so failures can name the offending location.
struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: "$".to_string(),
        }
    }

    /// Descends into an object key, failing if the key is absent.
    fn get(&self, key: &str) -> Result<Self, ParseError> {
        let path = format!("{}.{key}", self.path);
        match self.value.get(key) {
            Some(value) => Ok(Self { value, path }),
            None => Err(ParseError::MissingField { path }),
        }
    }

    /// Interprets the value as an array and yields indexed child nodes.
    fn elements(&self) -> Result<Vec<Self>, ParseError> {
        let Some(items) = self.value.as_array() else {
            return Err(self.unexpected("an array"));
        };
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, value)| Self {
                value,
                path: format!("{}[{index}]", self.path),
            })
            .collect())
    }

    fn as_str(&self) -> Result<&'a str, ParseError> {
        self.value
            .as_str()
            .ok_or_else(|| self.unexpected("a string"))
    }

    fn as_i64(&self) -> Result<i64, ParseError> {
        self.value
            .as_i64()
            .ok_or_else(|| self.unexpected("an integer"))
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedShape {
            path: self.path.clone(),
            expected,
            found: json_type(self.value),
        }
    }
}

/// Short JSON type name for error messages.
const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extracts autocomplete keywords from a `SearchModalQuery` response.
///
/// Walks `$[].data.universe_search.data[]` and, for every category block
/// whose `id` is the literal `"autocomplete"`, collects `items[].keyword` in
/// encounter order. Duplicates are kept; blocks with other ids are skipped
/// (but must still carry an `id`). A response with no autocomplete block
/// yields an empty list, not an error.
///
/// # Errors
///
/// Returns [`ParseError`] if the body is not JSON or any navigated field is
/// missing or wrongly shaped.
pub fn suggestions(body: &str) -> Result<Vec<String>, ParseError> {
    let root: Value = serde_json::from_str(body)?;
    let mut keywords = Vec::new();

    for wrapper in Node::root(&root).elements()? {
        let blocks = wrapper.get("data")?.get("universe_search")?.get("data")?;
        for block in blocks.elements()? {
            if block.get("id")?.as_str()? != "autocomplete" {
                continue;
            }
            for item in block.get("items")?.elements()? {
                keywords.push(item.get("keyword")?.as_str()?.to_owned());
            }
        }
    }

    Ok(keywords)
}

/// Extracts shop results from an `AceSearchShop` response.
///
/// Walks `$[].data.aceSearchShop.shops[]`, building a [`ShopResult`] from
/// each entry's `id`/`name`/`url` and deduplicating by identity.
///
/// # Errors
///
/// Returns [`ParseError`] if the body is not JSON or any navigated field is
/// missing or wrongly shaped.
pub fn shops(body: &str) -> Result<HashSet<ShopResult>, ParseError> {
    let root: Value = serde_json::from_str(body)?;
    let mut results = HashSet::new();

    for wrapper in Node::root(&root).elements()? {
        let shops = wrapper.get("data")?.get("aceSearchShop")?.get("shops")?;
        for shop in shops.elements()? {
            results.insert(shop_result(&shop)?);
        }
    }

    Ok(results)
}

/// Extracts shop results from a `SearchProductQuery` response.
///
/// Walks `$[].data.searchProduct.products[]` and builds a [`ShopResult`]
/// from each product's nested `shop` object, deduplicating by identity
/// (many products share a shop).
///
/// # Errors
///
/// Returns [`ParseError`] if the body is not JSON or any navigated field is
/// missing or wrongly shaped.
pub fn shops_from_products(body: &str) -> Result<HashSet<ShopResult>, ParseError> {
    let root: Value = serde_json::from_str(body)?;
    let mut results = HashSet::new();

    for wrapper in Node::root(&root).elements()? {
        let products = wrapper.get("data")?.get("searchProduct")?.get("products")?;
        for product in products.elements()? {
            results.insert(shop_result(&product.get("shop")?)?);
        }
    }

    Ok(results)
}

/// Extracts product results from a `ShopProducts` response.
///
/// Walks `$[].data.GetShopProduct.data[]`, building a [`ProductResult`]
/// from `product_id`, `name`, `product_url`, the nested `price.text_idr`
/// display text, and `primary_image.original`.
///
/// # Errors
///
/// Returns [`ParseError`] if the body is not JSON or any navigated field is
/// missing or wrongly shaped.
pub fn shop_products(body: &str) -> Result<HashSet<ProductResult>, ParseError> {
    let root: Value = serde_json::from_str(body)?;
    let mut results = HashSet::new();

    for wrapper in Node::root(&root).elements()? {
        let items = wrapper.get("data")?.get("GetShopProduct")?.get("data")?;
        for item in items.elements()? {
            results.insert(ProductResult::new(
                Platform::Tokopedia,
                item.get("product_id")?.as_i64()?,
                item.get("name")?.as_str()?,
                item.get("product_url")?.as_str()?,
                item.get("price")?.get("text_idr")?.as_str()?,
                item.get("primary_image")?.get("original")?.as_str()?,
            ));
        }
    }

    Ok(results)
}

/// Builds a [`ShopResult`] from an object carrying `id`/`name`/`url`.
fn shop_result(node: &Node<'_>) -> Result<ShopResult, ParseError> {
    Ok(ShopResult::new(
        Platform::Tokopedia,
        node.get("id")?.as_i64()?,
        node.get("name")?.as_str()?,
        node.get("url")?.as_str()?,
    ))
}
