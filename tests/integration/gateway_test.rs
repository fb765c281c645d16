// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{MockBehavior, MockClassifierServer};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use phishsentry::application::request_deduplicator::RequestDeduplicator;
use phishsentry::classifier::reqwest_classifier::ReqwestClassifier;
use phishsentry::config::settings::ScanOptions;
use phishsentry::domain::services::scan_orchestrator::ScanOrchestrator;
use phishsentry::infrastructure::connectivity::SharedConnectivity;
use phishsentry::presentation::routes;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(endpoint: &str, connectivity: SharedConnectivity) -> Router {
    let options = ScanOptions {
        endpoint: endpoint.to_string(),
        ..ScanOptions::default()
    };
    let classifier = Arc::new(ReqwestClassifier::from_options(&options).unwrap());
    let orchestrator = Arc::new(ScanOrchestrator::new(
        classifier,
        Arc::new(connectivity.clone()),
        &options,
    ));

    // The orchestrator answers in-process here; no worker queue.
    let deduplicator = Arc::new(RequestDeduplicator::new(orchestrator));
    routes::routes(deduplicator, connectivity)
}

async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_scan_endpoint_returns_wire_format() {
    let server = MockClassifierServer::start(MockBehavior::ok(json!({
        "assessment": { "riskLevel": "high", "score": 91, "guidance": "Avoid this link" }
    })))
    .await;
    let app = app(&server.endpoint, SharedConnectivity::default());

    let (status, body) = post_json(
        app,
        "/v1/scan",
        json!({ "type": "SCAN_URL", "url": "https://bad.example/x" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "ok",
            "assessment": {
                "url": "https://bad.example/x",
                "riskLevel": "high",
                "score": 91.0,
                "guidance": "Avoid this link"
            }
        })
    );
}

#[tokio::test]
async fn test_scan_endpoint_offline() {
    let server = MockClassifierServer::start(MockBehavior::ok(json!({}))).await;
    let app = app(&server.endpoint, SharedConnectivity::new(true));

    let (status, body) = post_json(
        app,
        "/v1/scan",
        json!({ "type": "SCAN_URL", "url": "https://x.example" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "offline");
    assert_eq!(body["assessment"], json!({ "url": "https://x.example", "riskLevel": "unknown" }));
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn test_unknown_message_type_is_rejected() {
    let server = MockClassifierServer::start(MockBehavior::ok(json!({}))).await;
    let app = app(&server.endpoint, SharedConnectivity::default());

    let (status, body) = post_json(app, "/v1/scan", json!({ "type": "PING" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unsupported message type");
}

#[tokio::test]
async fn test_health_reports_connectivity() {
    let app = app("http://127.0.0.1:9/scan", SharedConnectivity::new(true));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body, json!({ "status": "ok", "offline": true }));
}
