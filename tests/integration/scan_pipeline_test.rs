// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{MockBehavior, MockClassifierServer};
use axum::http::StatusCode;
use futures::future::join_all;
use phishsentry::application::channel::LocalChannel;
use phishsentry::application::request_deduplicator::RequestDeduplicator;
use phishsentry::classifier::reqwest_classifier::ReqwestClassifier;
use phishsentry::config::settings::ScanOptions;
use phishsentry::domain::models::assessment::{RiskAssessment, RiskLevel};
use phishsentry::domain::models::scan_result::ScanResult;
use phishsentry::domain::services::scan_orchestrator::ScanOrchestrator;
use phishsentry::infrastructure::connectivity::SharedConnectivity;
use phishsentry::workers::coordinator_worker::CoordinatorWorker;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

struct Pipeline {
    deduplicator: RequestDeduplicator,
    orchestrator: Arc<ScanOrchestrator>,
    connectivity: SharedConnectivity,
}

fn pipeline(endpoint: &str, timeout: Duration) -> Pipeline {
    let options = ScanOptions {
        endpoint: endpoint.to_string(),
        token: Some("test-token".to_string()),
        timeout,
        ttl: Duration::from_secs(300),
        reply_timeout: timeout + Duration::from_secs(1),
    };

    let connectivity = SharedConnectivity::default();
    let classifier = Arc::new(ReqwestClassifier::from_options(&options).unwrap());
    let orchestrator = Arc::new(ScanOrchestrator::new(
        classifier,
        Arc::new(connectivity.clone()),
        &options,
    ));

    let (channel, receiver) = LocalChannel::new(16, options.reply_timeout);
    CoordinatorWorker::new(orchestrator.clone(), receiver).start();

    Pipeline {
        deduplicator: RequestDeduplicator::new(Arc::new(channel)),
        orchestrator,
        connectivity,
    }
}

#[tokio::test]
async fn test_concurrent_scans_hit_classifier_once() {
    let server = MockClassifierServer::start(
        MockBehavior::ok(json!({ "riskLevel": "high", "score": 91 }))
            .delayed(Duration::from_millis(200)),
    )
    .await;
    let pipeline = pipeline(&server.endpoint, Duration::from_secs(4));
    let url = "https://bad.example/x";

    let results = join_all((0..5).map(|_| pipeline.deduplicator.scan(url))).await;

    let expected = ScanResult::ok(RiskAssessment {
        url: url.to_string(),
        risk_level: RiskLevel::High,
        score: Some(91.0),
        reason: None,
        guidance: None,
    });
    assert!(results.iter().all(|r| *r == expected));
    assert_eq!(server.hits(), 1);
    assert_eq!(pipeline.deduplicator.pending_len(), 0);

    // Then: 随后的调用命中缓存
    assert_eq!(pipeline.deduplicator.scan(url).await, expected);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_timeout_result_survives_late_reply() {
    let server = MockClassifierServer::start(
        MockBehavior::ok(json!({ "riskLevel": "low" })).delayed(Duration::from_millis(800)),
    )
    .await;
    let pipeline = pipeline(&server.endpoint, Duration::from_millis(150));
    let url = "https://slow.example";

    let result = pipeline.deduplicator.scan(url).await;
    assert_eq!(result, ScanResult::error("Request timeout"));

    tokio::time::sleep(Duration::from_millis(1000)).await;

    assert_eq!(
        pipeline.orchestrator.cache().get(url),
        Some(ScanResult::error("Request timeout"))
    );
    assert_eq!(pipeline.deduplicator.scan(url).await, result);
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_offline_never_reaches_classifier() {
    let server = MockClassifierServer::start(MockBehavior::ok(json!({ "riskLevel": "low" }))).await;
    let pipeline = pipeline(&server.endpoint, Duration::from_secs(4));
    pipeline.connectivity.set_offline(true);
    let url = "https://x.example";

    let result = pipeline.deduplicator.scan(url).await;

    assert_eq!(result, ScanResult::offline(RiskAssessment::unknown(url)));
    assert_eq!(pipeline.orchestrator.cache().get(url), Some(result));
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn test_upstream_failure_status() {
    let server =
        MockClassifierServer::start(MockBehavior::status(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let pipeline = pipeline(&server.endpoint, Duration::from_secs(4));

    let result = pipeline.deduplicator.scan("https://a.example").await;
    assert_eq!(result, ScanResult::error("API responded with status 500"));
    assert_eq!(result.badge_label(), "Unknown");
}

#[tokio::test]
async fn test_invalid_inputs() {
    let server = MockClassifierServer::start(MockBehavior::ok(json!({}))).await;
    let pipeline = pipeline(&server.endpoint, Duration::from_secs(4));

    assert_eq!(
        pipeline.deduplicator.scan("").await,
        ScanResult::error("Invalid URL provided.")
    );
    assert_eq!(
        pipeline.deduplicator.scan("javascript-void").await,
        ScanResult::error("Invalid URL")
    );
    assert!(pipeline.orchestrator.cache().is_empty());
    assert_eq!(server.hits(), 0);
}
