//! Integration tests for the client facade.
//!
//! These tests run the full builder -> transport -> extractor pipelines
//! against a local mock of the upstream GraphQL endpoint. The two shop
//! search pipelines share one endpoint upstream, so the mocks discriminate
//! on the operation name embedded in the request envelope.

use std::collections::HashSet;

use tokopedia_search::{Error, Platform, ShopResult, TokopediaClient};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUGGESTION_BODY: &str = r#"[{"data":{"universe_search":{"data":[
    {"id":"shop","items":[{"keyword":"not this"}]},
    {"id":"autocomplete","items":[{"keyword":"phone"},{"keyword":"phone case"}]}
]}}}]"#;

const SHOP_SEARCH_BODY: &str = r#"[{"data":{"aceSearchShop":{"shops":[
    {"id":1,"name":"S1","url":"u1"}
]}}}]"#;

const PRODUCT_SEARCH_BODY: &str = r#"[{"data":{"searchProduct":{"products":[
    {"id":900,"name":"p1","shop":{"id":1,"name":"S1-alt","url":"u1-alt"}},
    {"id":901,"name":"p2","shop":{"id":2,"name":"S2","url":"u2"}}
]}}}]"#;

const SHOP_PRODUCTS_BODY: &str = r#"[{"data":{"GetShopProduct":{"data":[
    {"product_id":555,"name":"Widget","product_url":"/w",
     "price":{"text_idr":"Rp10.000"},
     "primary_image":{"original":"http://img/w.jpg"}}
]}}}]"#;

async fn mock_operation(server: &MockServer, operation: &str, body: &str) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("referer", "https://www.tokopedia.com/"))
        .and(body_string_contains(operation))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn suggestions_returns_keywords_in_upstream_order() {
    let server = MockServer::start().await;
    mock_operation(&server, "SearchModalQuery", SUGGESTION_BODY).await;
    let client = TokopediaClient::with_endpoint(server.uri());

    let keywords = client.suggestions("phone").await.unwrap();

    assert_eq!(keywords, vec!["phone", "phone case"]);
}

#[tokio::test]
async fn search_shops_unions_both_pipelines_by_identity() {
    let server = MockServer::start().await;
    mock_operation(&server, "AceSearchShop", SHOP_SEARCH_BODY).await;
    mock_operation(&server, "SearchProductQuery", PRODUCT_SEARCH_BODY).await;
    let client = TokopediaClient::with_endpoint(server.uri());

    let shops = client.search_shops("phone").await.unwrap();

    // Shop 1 appears in both pipelines with different display strings; the
    // identity rule collapses it to one entry and the direct shop-search
    // copy wins.
    assert_eq!(shops.len(), 2);
    let ids: HashSet<i64> = shops.iter().map(|s| s.id).collect();
    assert_eq!(ids, HashSet::from([1, 2]));
    let shop_one = shops
        .get(&ShopResult::new(Platform::Tokopedia, 1, "", ""))
        .unwrap();
    assert_eq!(shop_one.name, "S1");
    assert_eq!(shop_one.url, "u1");
    // Both round trips happened (mock expectations verify on drop).
}

#[tokio::test]
async fn search_shop_products_maps_listing_fields() {
    let server = MockServer::start().await;
    mock_operation(&server, "ShopProducts", SHOP_PRODUCTS_BODY).await;
    let client = TokopediaClient::with_endpoint(server.uri());

    let products = client.search_shop_products(42, "widget").await.unwrap();

    assert_eq!(products.len(), 1);
    let product = products.iter().next().unwrap();
    assert_eq!(product.id, 555);
    assert_eq!(product.name, "Widget");
    assert_eq!(product.url, "/w");
    assert_eq!(product.price, "Rp10.000");
    assert_eq!(product.image, "http://img/w.jpg");
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_transport_error_from_every_operation() {
    // Nothing listens on port 1.
    let client = TokopediaClient::with_endpoint("http://127.0.0.1:1/");

    assert!(matches!(
        client.suggestions("phone").await,
        Err(Error::Transport(_))
    ));
    assert!(matches!(
        client.search_shops("phone").await,
        Err(Error::Transport(_))
    ));
    assert!(matches!(
        client.search_shop_products(1, "phone").await,
        Err(Error::Transport(_))
    ));
}

#[tokio::test]
async fn error_status_body_is_returned_and_fails_extraction() {
    // The transport hands back whatever body it read, even for an error
    // status; the extractor then rejects the unexpected shape.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>upstream error</html>"))
        .mount(&server)
        .await;
    let client = TokopediaClient::with_endpoint(server.uri());

    assert!(matches!(
        client.suggestions("phone").await,
        Err(Error::Parse(_))
    ));
}

#[tokio::test]
async fn search_shops_fails_wholesale_when_second_pipeline_fails() {
    let server = MockServer::start().await;
    mock_operation(&server, "AceSearchShop", SHOP_SEARCH_BODY).await;
    // The product-search pipeline returns a body missing the expected path.
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("SearchProductQuery"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"data":{}}]"#))
        .mount(&server)
        .await;
    let client = TokopediaClient::with_endpoint(server.uri());

    // No partial union from the pipeline that succeeded.
    assert!(matches!(
        client.search_shops("phone").await,
        Err(Error::Parse(_))
    ));
}

#[tokio::test]
async fn suggestions_with_no_autocomplete_block_is_an_empty_success() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "SearchModalQuery",
        r#"[{"data":{"universe_search":{"data":[{"id":"shop","items":[]}]}}}]"#,
    )
    .await;
    let client = TokopediaClient::with_endpoint(server.uri());

    assert!(client.suggestions("phone").await.unwrap().is_empty());
}
