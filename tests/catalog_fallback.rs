//! Product catalog loading: remote first, cache file second, built-in
//! seed set last.

#![deny(clippy::all, clippy::pedantic)]

mod support;

use std::sync::Arc;

use httpmock::MockServer;
use serde_json::json;
use tempfile::TempDir;

use lactea::application::products::ProductCatalog;
use lactea::domain::entities::ProductRecord;
use lactea::infra::local::{JsonFileStore, ProductCache};
use lactea::infra::remote::RemoteRepositories;

fn catalog(server: &MockServer, dir: &TempDir) -> ProductCatalog {
    let repos =
        Arc::new(RemoteRepositories::connect(&server.base_url(), "public-key").expect("repos"));
    let cache = Arc::new(JsonFileStore::new(dir.path().join("productos.json")));
    ProductCatalog::new(repos, cache)
}

#[tokio::test]
async fn load_mirrors_remote_rows_into_the_cache_file() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1/productos");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                support::product_row(2, "Yogurt de mora", true),
                support::product_row(1, "Queso doble crema", true),
            ]));
    });

    let dir = TempDir::new().expect("tempdir");
    let mut catalog = catalog(&server, &dir);
    catalog.load().await;

    assert!(catalog.error().is_none());
    assert_eq!(catalog.items().len(), 2);

    let mirror = JsonFileStore::new(dir.path().join("productos.json"));
    let cached = ProductCache::load(&mirror)
        .await
        .expect("cache readable")
        .expect("cache written");
    assert_eq!(cached, catalog.items());
}

#[tokio::test]
async fn load_serves_the_cache_when_the_remote_is_down() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1/productos");
        then.status(503).body("unavailable");
    });

    let dir = TempDir::new().expect("tempdir");
    let mirror = JsonFileStore::new(dir.path().join("productos.json"));
    let cached: Vec<ProductRecord> =
        serde_json::from_value(json!([support::product_row(5, "Kumis", true)])).expect("rows");
    ProductCache::save(&mirror, &cached).await.expect("seed cache");

    let mut catalog = catalog(&server, &dir);
    catalog.load().await;

    assert_eq!(catalog.error(), Some("Error cargando productos"));
    assert_eq!(catalog.items(), cached.as_slice());
}

#[tokio::test]
async fn load_falls_back_to_the_builtin_catalog_without_a_cache() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1/productos");
        then.status(503).body("unavailable");
    });

    let dir = TempDir::new().expect("tempdir");
    let mut catalog = catalog(&server, &dir);
    catalog.load().await;

    assert_eq!(catalog.error(), Some("Error cargando productos"));
    assert_eq!(catalog.items().len(), 19);
    let stats = catalog.stats();
    assert_eq!(stats.total, 19);
    assert!(stats.categorias >= 3);
}

#[tokio::test]
async fn empty_remote_table_is_seeded_with_the_builtin_catalog() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1/productos");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let create = server.mock(|when, then| {
        when.method("POST").path("/rest/v1/productos");
        then.status(201)
            .header("content-type", "application/json")
            .json_body(json!([support::product_row(30, "Sembrado", true)]));
    });

    let dir = TempDir::new().expect("tempdir");
    let mut catalog = catalog(&server, &dir);
    catalog.load().await;

    create.assert_hits(19);
    assert_eq!(catalog.items().len(), 19);
}
