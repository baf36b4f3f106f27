use chrono::Utc;
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;

use tryon_dashboard::application::dashboard_service::DashboardService;
use tryon_dashboard::application::data_source::{Credential, Endpoint, FetchError};
use tryon_dashboard::infrastructure::http_data_source::HttpDataSource;
use tryon_dashboard::infrastructure::json_mapper::snapshot_to_view;

fn service_for(server: &MockServer) -> DashboardService {
    DashboardService::new(Arc::new(HttpDataSource::new(server.base_url())))
}

async fn mount_products(server: &MockServer, status: u16) {
    let products: Vec<_> = (1..=7)
        .map(|i| {
            json!({
                "id": format!("p{}", i),
                "name": format!("Product {}", i),
                "sku": format!("SKU-{}", i),
                "images": [format!("/products/p{}.png", i)]
            })
        })
        .collect();
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/products")
                .header("authorization", "Bearer test-token");
            then.status(status)
                .header("content-type", "application/json")
                .json_body(json!(products));
        })
        .await;
}

async fn mount_analytics(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/analytics/summary")
                .query_param("period", "daily");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"kpis": {
                    "totalTryOns": 50, "widgetOpens": 200,
                    "totalEvents": 1000, "totalErrors": 20,
                    "uniqueVisitors": 40, "uniqueSessions": 60
                }}));
        })
        .await;
}

async fn mount_credits(server: &MockServer, status: u16) {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/credits")
                .header("authorization", "Bearer test-token");
            then.status(status)
                .header("content-type", "application/json")
                .json_body(json!({"credits": 30}));
        })
        .await;
}

async fn mount_usage(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/usage/analytics")
                .query_param("period", "monthly")
                .header("authorization", "Bearer test-token");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "totalCredits": 100, "usedThisPeriod": 70,
                    "costPerCredit": 0.5, "totalMoney": 35
                }));
        })
        .await;
}

async fn mount_purchases(server: &MockServer) {
    let purchases: Vec<_> = (1..=5)
        .map(|i| {
            json!({
                "id": format!("t{}", i),
                "date": format!("2024-05-0{}", i),
                "amount": 10.0 * i as f64,
                "description": format!("Credit pack {}", i)
            })
        })
        .collect();
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/credit-purchases")
                .query_param("limit", "3")
                .header("authorization", "Bearer test-token");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!(purchases));
        })
        .await;
}

#[tokio::test]
async fn dashboard_aggregates_all_five_endpoints() {
    let server = MockServer::start_async().await;
    mount_products(&server, 200).await;
    mount_analytics(&server).await;
    mount_credits(&server, 200).await;
    mount_usage(&server).await;
    mount_purchases(&server).await;

    let snapshot = service_for(&server)
        .get_dashboard(&Credential::new("test-token"), Utc::now())
        .await
        .expect("aggregation succeeds");

    assert_eq!(snapshot.product_count, 7);
    assert_eq!(snapshot.recent_products.len(), 5);
    assert_eq!(snapshot.recent_products[0].id, "p1");
    assert_eq!(snapshot.analytics.conversion_rate, 25.0);
    assert_eq!(snapshot.analytics.error_rate, 2.0);
    assert_eq!(snapshot.analytics.window.unique_visitors, 40);
    assert_eq!(snapshot.subscription.current_credits, 30.0);
    assert_eq!(snapshot.subscription.cost_per_credit, 0.5);
    assert_eq!(snapshot.recent_transactions.len(), 3);
    assert_eq!(snapshot.recent_transactions[2].id, "t3");

    // The view resolves catalog image references against the API base
    let view = snapshot_to_view(snapshot, &server.base_url());
    assert_eq!(
        view.products.recent[0].images[0],
        format!("{}/api/products/p1.png", server.base_url())
    );
}

#[tokio::test]
async fn rejected_credential_fails_the_whole_aggregation() {
    let server = MockServer::start_async().await;
    mount_products(&server, 200).await;
    mount_analytics(&server).await;
    mount_credits(&server, 401).await;
    mount_usage(&server).await;
    mount_purchases(&server).await;

    let error = service_for(&server)
        .get_dashboard(&Credential::new("test-token"), Utc::now())
        .await
        .expect_err("aggregation fails");

    assert_eq!(error.endpoint, Endpoint::Credits);
    assert_eq!(error.source, FetchError::Unauthorized);
}

#[tokio::test]
async fn missing_catalog_fails_the_whole_aggregation() {
    let server = MockServer::start_async().await;
    mount_products(&server, 404).await;
    mount_analytics(&server).await;
    mount_credits(&server, 200).await;
    mount_usage(&server).await;
    mount_purchases(&server).await;

    let error = service_for(&server)
        .get_dashboard(&Credential::new("test-token"), Utc::now())
        .await
        .expect_err("aggregation fails");

    assert_eq!(error.endpoint, Endpoint::Products);
    assert_eq!(error.source, FetchError::NotFound);
}

#[tokio::test]
async fn unparseable_body_surfaces_as_malformed() {
    let server = MockServer::start_async().await;
    mount_products(&server, 200).await;
    mount_credits(&server, 200).await;
    mount_usage(&server).await;
    mount_purchases(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/analytics/summary");
            then.status(200)
                .header("content-type", "application/json")
                .body("not-json");
        })
        .await;

    let error = service_for(&server)
        .get_dashboard(&Credential::new("test-token"), Utc::now())
        .await
        .expect_err("aggregation fails");

    assert_eq!(error.endpoint, Endpoint::Analytics);
    assert!(matches!(error.source, FetchError::Malformed(_)));
}
