use super::helpers::{
    assert_status, get, product, read_json, spawn_app, spawn_app_with, spawn_failing_app,
};
use axum::http::StatusCode;
use kalakriti_api::infrastructure::repositories::in_memory_product_catalog::InMemoryProductCatalog;
use serde_json::{Value, json};
use std::sync::Arc;

fn suggestion_names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("suggestion array")
        .iter()
        .map(|s| s["name"].as_str().expect("suggestion name").to_string())
        .collect()
}

#[tokio::test]
async fn prefix_matches_are_sorted_by_name() {
    let app = spawn_app_with(Arc::new(InMemoryProductCatalog::new(vec![
        product("Vase", "", &[], 60.0, 0),
        product("Terracotta Bowl", "", &[], 25.0, 1),
        product("Teapot", "", &[], 45.0, 2),
    ])));

    let res = get(&app.app, "/search/autocomplete?q=Te").await;
    assert_status(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;

    assert_eq!(suggestion_names(&body), ["Teapot", "Terracotta Bowl"]);
    let first = body[0].as_object().expect("suggestion object");
    assert_eq!(first.len(), 2);
    assert!(first.contains_key("id"));
}

#[tokio::test]
async fn prefix_match_ignores_case() {
    let app = spawn_app();

    let body: Value = read_json(get(&app.app, "/search/autocomplete?q=te").await).await;
    assert_eq!(suggestion_names(&body), ["Teapot", "Terracotta Bowl"]);
}

#[tokio::test]
async fn prefix_must_start_the_name() {
    let app = spawn_app();

    // "Teapot" contains "pot" but does not start with it.
    let body: Value = read_json(get(&app.app, "/search/autocomplete?q=pot").await).await;
    assert_eq!(suggestion_names(&body), ["Potli Bag"]);
}

#[tokio::test]
async fn at_most_ten_suggestions_are_returned() {
    let products = (0..15)
        .map(|i| product(&format!("Tile {:02}", i), "", &[], 5.0, i))
        .collect();
    let app = spawn_app_with(Arc::new(InMemoryProductCatalog::new(products)));

    let body: Value = read_json(get(&app.app, "/search/autocomplete?q=tile").await).await;
    let names = suggestion_names(&body);

    assert_eq!(names.len(), 10);
    assert_eq!(names.first().map(String::as_str), Some("Tile 00"));
    assert_eq!(names.last().map(String::as_str), Some("Tile 09"));
}

#[tokio::test]
async fn missing_or_blank_query_is_too_short() {
    let app = spawn_app();

    for uri in [
        "/search/autocomplete",
        "/search/autocomplete?q=",
        "/search/autocomplete?q=%20%20",
    ] {
        let res = get(&app.app, uri).await;
        assert_status(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = read_json(res).await;
        assert_eq!(body, json!({ "error": "Query too short" }), "uri {}", uri);
    }
}

#[tokio::test]
async fn store_failure_returns_generic_error() {
    let app = spawn_failing_app();

    let res = get(&app.app, "/search/autocomplete?q=te").await;
    assert_status(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = read_json(res).await;
    assert_eq!(body, json!({ "error": "Autocomplete failed" }));
}
