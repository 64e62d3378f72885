//! Request envelope construction for the upstream GraphQL operations.
//!
//! Each public function here is a pure mapping from caller inputs to the
//! complete serialized request envelope: a JSON array containing exactly one
//! `{"operationName":…,"variables":…,"query":…}` object. The four GraphQL
//! documents are wire-format constants reproduced verbatim (aliases,
//! `__typename` selections, and literal `\n` sequences included); the
//! upstream service returns the expected response shape only for these exact
//! documents.
//!
//! Builders never perform I/O, never validate the term, and are
//! byte-deterministic for identical inputs (including the hash-derived
//! `uniqueId`/`unique_id` nonce, so envelopes are reproducible in tests).
//!
//! # Escaping
//!
//! The term is interpolated differently per operation, matching the upstream
//! wire behavior exactly:
//!
//! - [`suggestion`], [`shop_search`], [`shop_products`]: the term is spliced
//!   into the JSON text *raw*, without escaping. A term containing `"` or
//!   `\` produces an envelope that is not well-formed JSON.
//! - [`product_search`]: the term is percent-escaped before being embedded
//!   in the `params` string.
//!
//! This inconsistency is inherited from the upstream wire format and must
//! not be normalized without revalidating against the live service.

/// Fixed `SearchModalQuery` document (autocomplete suggestions).
const SUGGESTION_DOC: &str = r"query SearchModalQuery($q: String, $uniqueId: String, $source: String, $device: String, $userId: Int, $safeSearch: String, $navsource: String) {\n  universe_search(q: $q, uniqueId: $uniqueId, source: $source, device: $device, userId: $userId, safeSearch: $safeSearch, navsource: $navsource) {\n    data {\n      id\n      name\n      items {\n        id\n        location\n        applink\n        imageUrl: imageURI\n        url\n        keyword\n        recom\n        sc\n        iskol\n        isOfficial\n        postCount: post_count\n        affiliateUsername: affiliate_username\n        __typename\n      }\n      __typename\n    }\n    __typename\n  }\n}\n";

/// Fixed `AceSearchShop` document (direct shop search).
const SHOP_SEARCH_DOC: &str = r"query AceSearchShop($params: String!) {\n  aceSearchShop(params: $params) {\n    totalData: total_shop\n    shops {\n      id: shop_id\n      name: shop_name\n      domain: shop_domain\n      ownerId: shop_is_owner\n      city: shop_location\n      shopStatus: shop_status\n      tagLine: shop_tag_line\n      desc: shop_description\n      reputationScore: reputation_score\n      totalFave: shop_total_favorite\n      isPowerBadge: shop_gold_shop\n      isOfficial: is_official\n      url: shop_url\n      imageURL: shop_image\n      reputationImageURL: reputation_image_uri\n      shopLucky: shop_lucky\n      products {\n        id\n        name\n        url\n        price\n        productImg: image_url\n        priceText: price_format\n        __typename\n      }\n      GAKey: ga_key\n      favorited\n      voucher {\n        freeShipping: free_shipping\n        cashback {\n          cashbackValue: cashback_value\n          isPercentage: is_percentage\n          __typename\n        }\n        __typename\n      }\n      __typename\n    }\n    __typename\n  }\n}\n";

/// Fixed `SearchProductQuery` document (product search, used to derive shops).
const PRODUCT_SEARCH_DOC: &str = r"query SearchProductQuery($params: String) {\n  searchProduct(params: $params) {\n    source\n    totalData: count\n    totalDataText: count_text\n    additionalParams: additional_params\n    redirection {\n      redirectionURL: redirect_url\n      departmentID: department_id\n      __typename\n    }\n    responseCode: response_code\n    keywordProcess: keyword_process\n    suggestion {\n      suggestion\n      suggestionCount\n      currentKeyword\n      instead\n      insteadCount\n      suggestionText: text\n      suggestionTextQuery: query\n      __typename\n    }\n    related {\n      relatedKeyword: related_keyword\n      otherRelated: other_related {\n        keyword\n        url\n        __typename\n      }\n      __typename\n    }\n    isQuerySafe\n    ticker {\n      text\n      query\n      typeID: type_id\n      __typename\n    }\n    products {\n      id\n      name\n      childs\n      url\n      imageURL: image_url\n      imageURL300: image_url_300\n      imageURL500: image_url_500\n      imageURL700: image_url_700\n      price\n      priceRange: price_range\n      category: department_id\n      categoryID: category_id\n      categoryName: category_name\n      categoryBreadcrumb: category_breadcrumb\n      discountPercentage: discount_percentage\n      originalPrice: original_price\n      shop {\n        id\n        name\n        url\n        isPowerBadge: is_power_badge\n        isOfficial: is_official\n        location\n        city\n        reputation\n        clover\n        __typename\n      }\n      wholesalePrice: whole_sale_price {\n        quantityMin: quantity_min\n        quantityMax: quantity_max\n        price\n        __typename\n      }\n      courierCount: courier_count\n      condition\n      labels {\n        title\n        color\n        __typename\n      }\n      labelGroups: label_groups {\n        position\n        type\n        title\n        __typename\n      }\n      badges {\n        title\n        imageURL: image_url\n        show\n        __typename\n      }\n      isFeatured: is_featured\n      rating\n      countReview: count_review\n      stock\n      GAKey: ga_key\n      preorder: is_preorder\n      wishlist\n      shop {\n        id\n        name\n        url\n        goldmerchant: is_power_badge\n        location\n        city\n        reputation\n        clover\n        official: is_official\n        __typename\n      }\n      __typename\n    }\n    __typename\n  }\n}\n";

/// Fixed `ShopProducts` document (per-shop product search).
const SHOP_PRODUCTS_DOC: &str = r"query ShopProducts($sid: String!, $page: Int, $perPage: Int, $keyword: String, $etalaseId: String, $sort: Int) {\n  GetShopProduct(shopID: $sid, filter: {page: $page, perPage: $perPage, fkeyword: $keyword, fmenu: $etalaseId, sort: $sort}) {\n    status\n    errors\n    links {\n      prev\n      next\n      __typename\n    }\n    data {\n      name\n      product_url\n      product_id\n      price {\n        text_idr\n        __typename\n      }\n      primary_image {\n        original\n        thumbnail\n        resize300\n        __typename\n      }\n      flags {\n        isSold\n        isPreorder\n        isWholesale\n        isWishlist\n        __typename\n      }\n      campaign {\n        discounted_percentage\n        original_price_fmt\n        start_date\n        end_date\n        __typename\n      }\n      label {\n        color_hex\n        content\n        __typename\n      }\n      badge {\n        title\n        image_url\n        __typename\n      }\n      stats {\n        reviewCount\n        rating\n        __typename\n      }\n      category {\n        id\n        __typename\n      }\n      __typename\n    }\n    __typename\n  }\n}\n";

/// Deterministic per-term nonce sent as the `uniqueId`/`unique_id` variable.
///
/// A fast, non-cryptographic 128-bit hash of the term bytes, rendered as 32
/// lowercase hex digits. Purely a deterministic per-term value; it carries no
/// cryptographic meaning.
#[must_use]
pub fn term_nonce(term: &str) -> String {
    format!("{:032x}", twox_hash::xxh3::hash128(term.as_bytes()))
}

/// Builds the `SearchModalQuery` envelope for autocomplete suggestions.
///
/// Locale/device/source variables are fixed constants (`id`, `desktop`,
/// `search`); the term is interpolated raw (see module docs on escaping).
#[must_use]
pub fn suggestion(term: &str) -> String {
    let nonce = term_nonce(term);
    format!(
        "[{{\"operationName\":\"SearchModalQuery\",\"variables\":{{\"lang\":\"id\",\"device\":\"desktop\",\"navsource\":\"\",\"safeSearch\":\"true\",\"source\":\"search\",\"q\":\"{term}\",\"uniqueId\":\"{nonce}\",\"userId\":0}},\"query\":\"{SUGGESTION_DOC}\"}}]"
    )
}

/// Builds the `AceSearchShop` envelope for direct shop search.
///
/// The term lands raw inside the single `params` variable; row count and
/// offset are fixed.
#[must_use]
pub fn shop_search(term: &str) -> String {
    format!(
        "[{{\"operationName\":\"AceSearchShop\",\"variables\":{{\"params\":\"q={term}&rows=100&start=0&user_id=0\"}},\"query\":\"{SHOP_SEARCH_DOC}\"}}]"
    )
}

/// Builds the `SearchProductQuery` envelope (product search by term).
///
/// The only builder that escapes the term: it is percent-escaped before
/// being embedded in the `params` string, alongside the deterministic
/// `unique_id` nonce.
#[must_use]
pub fn product_search(term: &str) -> String {
    let escaped = urlencoding::encode(term);
    let nonce = term_nonce(term);
    format!(
        "[{{\"operationName\":\"SearchProductQuery\",\"variables\":{{\"params\":\"scheme=https&device=desktop&related=true&st=product&q={escaped}&ob=23&page=1&variants=&shipping=&start=0&rows=200&user_id=&unique_id={nonce}&safe_search=false&source=search\"}},\"query\":\"{PRODUCT_SEARCH_DOC}\"}}]"
    )
}

/// Builds the `ShopProducts` envelope for product search within one shop.
///
/// `page`, `perPage`, `etalaseId`, and `sort` are fixed; the keyword is
/// interpolated raw.
#[must_use]
pub fn shop_products(store_id: i64, term: &str) -> String {
    format!(
        "[{{\"operationName\":\"ShopProducts\",\"variables\":{{\"sid\":\"{store_id}\",\"page\":1,\"perPage\":5,\"keyword\":\"{term}\",\"etalaseId\":\"etalase\",\"sort\":1}},\"query\":\"{SHOP_PRODUCTS_DOC}\"}}]"
    )
}
