//! Inventory repository and its fallback ladder against a mocked remote.
//!
//! Both transports point at the same mock server; the primary path is told
//! apart by its bearer token, which the direct transport never sends.

#![deny(clippy::all, clippy::pedantic)]

mod support;

use httpmock::MockServer;
use serde_json::json;

use lactea::application::repos::{InventoryPatch, InventoryRepo, RepoError};
use lactea::domain::types::InventorySource;
use lactea::infra::remote::RemoteRepositories;

fn repos(server: &MockServer) -> RemoteRepositories {
    RemoteRepositories::connect(&server.base_url(), "public-key").expect("repos")
}

#[tokio::test]
async fn list_serves_live_rows_from_the_primary_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/rest/v1/inventario")
            .header("authorization", "Bearer public-key");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([support::inventory_row(1, 3, 25, 5)]));
    });

    let snapshot = repos(&server).list().await;
    mock.assert();
    assert_eq!(snapshot.source, InventorySource::Live);
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].producto_id, 3);
}

#[tokio::test]
async fn list_rides_the_direct_transport_when_the_primary_fails() {
    let server = MockServer::start();
    let primary = server.mock(|when, then| {
        when.method("GET")
            .path("/rest/v1/inventario")
            .header_exists("authorization");
        then.status(500).body("boom");
    });
    let direct = server.mock(|when, then| {
        when.method("GET")
            .path("/rest/v1/inventario")
            .header_missing("authorization")
            .header("apikey", "public-key");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([support::inventory_row(2, 5, 0, 3)]));
    });

    let snapshot = repos(&server).list().await;
    primary.assert();
    direct.assert();
    assert_eq!(snapshot.source, InventorySource::Direct);
    assert_eq!(snapshot.items.len(), 1);
}

#[tokio::test]
async fn list_never_fails_and_serves_fixtures_when_both_rungs_break() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/v1/inventario");
        then.status(503).body("unavailable");
    });

    let repos = repos(&server);
    let first = repos.list().await;
    let second = repos.list().await;

    assert_eq!(first.source, InventorySource::Fixture);
    assert!(!first.items.is_empty());
    assert_eq!(first.items, second.items);
}

#[tokio::test]
async fn update_falls_through_when_the_primary_matches_no_rows() {
    let server = MockServer::start();
    let primary = server.mock(|when, then| {
        when.method("PATCH")
            .path("/rest/v1/inventario")
            .query_param("producto_id", "eq.3")
            .header_exists("authorization");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let direct = server.mock(|when, then| {
        when.method("PATCH")
            .path("/rest/v1/inventario")
            .query_param("producto_id", "eq.3")
            .header_missing("authorization")
            .header("Prefer", "return=representation");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([support::inventory_row(1, 3, 40, 5)]));
    });

    let rows = repos(&server)
        .update_by_product(
            3,
            InventoryPatch {
                cantidad_disponible: Some(40),
                ..InventoryPatch::default()
            },
        )
        .await
        .expect("update");
    primary.assert();
    direct.assert();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cantidad_disponible, 40);
}

#[tokio::test]
async fn update_matching_nothing_on_either_rung_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("PATCH").path("/rest/v1/inventario");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let err = repos(&server)
        .update_by_product(
            77,
            InventoryPatch {
                cantidad_minima: Some(2),
                ..InventoryPatch::default()
            },
        )
        .await
        .expect_err("missing row");
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn delete_retries_on_the_direct_transport() {
    let server = MockServer::start();
    let primary = server.mock(|when, then| {
        when.method("DELETE")
            .path("/rest/v1/inventario")
            .query_param("producto_id", "eq.9")
            .header_exists("authorization");
        then.status(500).body("boom");
    });
    let direct = server.mock(|when, then| {
        when.method("DELETE")
            .path("/rest/v1/inventario")
            .query_param("producto_id", "eq.9")
            .header_missing("authorization");
        then.status(204);
    });

    repos(&server).delete_by_product(9).await.expect("delete");
    primary.assert();
    direct.assert();
}
