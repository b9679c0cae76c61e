use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::{Duration, TimeZone, Utc};
use kalakriti_api::{
    config::Config,
    domain::{
        product::{
            entity::{Product, ProductSuggestion},
            errors::DomainError,
            filter::ProductFilter,
            repository::ProductCatalog,
        },
        shared::pagination::PageRequest,
    },
    infrastructure::repositories::in_memory_product_catalog::InMemoryProductCatalog,
    presentation::http::{routes::create_router, state::AppState},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

/// Catalog whose store is always unreachable.
pub struct FailingCatalog;

#[async_trait]
impl ProductCatalog for FailingCatalog {
    async fn find_products(
        &self,
        _filter: &ProductFilter,
        _page: &PageRequest,
    ) -> Result<Vec<Product>, DomainError> {
        Err(DomainError::InfrastructureError(
            "connection refused (os error 111)".into(),
        ))
    }

    async fn suggest_by_name_prefix(
        &self,
        _prefix: &str,
        _limit: u32,
    ) -> Result<Vec<ProductSuggestion>, DomainError> {
        Err(DomainError::InfrastructureError(
            "connection refused (os error 111)".into(),
        ))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Err(DomainError::InfrastructureError(
            "connection refused (os error 111)".into(),
        ))
    }
}

pub fn build_config() -> Config {
    Config {
        database_url: "postgres://unused@localhost/kalakriti".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        search_default_limit: 20,
        search_max_limit: 100,
        autocomplete_limit: 10,
        allowed_origins: vec![],
        run_migrations: false,
        ignore_missing_migrations: true,
    }
}

/// Builds a product created `age_days` after a fixed epoch; larger means newer.
pub fn product(name: &str, description: &str, tags: &[&str], price: f64, age_days: i64) -> Product {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Product {
        id: Uuid::now_v7(),
        name: name.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        price,
        created_at: epoch + Duration::days(age_days),
    }
}

/// Six handcrafted products, newest first: Diya Set, Potli Bag, Madhubani
/// Painting, Vase, Terracotta Bowl, Teapot.
pub fn sample_products() -> Vec<Product> {
    vec![
        product("Teapot", "Engraved brass teapot", &["kitchen", "brass"], 45.0, 0),
        product("Terracotta Bowl", "Glazed earthen bowl", &["pottery"], 25.0, 1),
        product("Vase", "Hand thrown clay vase", &["pottery", "decor"], 60.0, 2),
        product("Madhubani Painting", "Mithila folk art on handmade paper", &["art"], 120.0, 3),
        product("Potli Bag", "Embroidered drawstring pouch", &["textile"], 15.0, 4),
        product("Diya Set", "Set of four clay lamps", &["festive", "pottery"], 8.0, 5),
    ]
}

pub struct TestApp {
    pub app: Router,
}

pub fn spawn_app_with(catalog: Arc<dyn ProductCatalog>) -> TestApp {
    let state = AppState {
        config: build_config(),
        catalog,
    };
    TestApp {
        app: create_router(state),
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(InMemoryProductCatalog::new(sample_products())))
}

pub fn spawn_failing_app() -> TestApp {
    spawn_app_with(Arc::new(FailingCatalog))
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    send(app, req).await
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub fn assert_status(status: StatusCode, expected: StatusCode) {
    assert_eq!(status, expected, "expected {}, got {}", expected, status);
}
