// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use phishsentry::domain::models::assessment::{RiskAssessment, RiskLevel};
use phishsentry::domain::models::scan_result::ScanResult;
use phishsentry::infrastructure::cache::scan_cache::ScanCache;
use std::time::Duration;

fn assessment(url: &str, level: RiskLevel) -> RiskAssessment {
    RiskAssessment {
        url: url.to_string(),
        risk_level: level,
        score: Some(42.0),
        reason: Some("Recently registered domain".to_string()),
        guidance: None,
    }
}

#[tokio::test(start_paused = true)]
async fn test_cache_ok_then_read_before_and_after_ttl() {
    let cache = ScanCache::new(Duration::from_millis(300_000));
    let url = "https://a.example/login";
    let stored = assessment(url, RiskLevel::Medium);

    // When: 写入成功结果
    cache.put(url, ScanResult::ok(stored.clone()));

    // Then: TTL内读取得到同一评估
    tokio::time::advance(Duration::from_millis(299_999)).await;
    let cached = cache.get(url).expect("fresh entry");
    assert_eq!(cached.assessment(), Some(&stored));

    // Then: 超过TTL后未命中
    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(cache.get(url).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_error_and_offline_results_are_cacheable() {
    let cache = ScanCache::default();

    cache.put("https://a.example", ScanResult::error("Request timeout"));
    cache.put(
        "https://b.example",
        ScanResult::offline(RiskAssessment::unknown("https://b.example")),
    );

    assert_eq!(
        cache.get("https://a.example"),
        Some(ScanResult::error("Request timeout"))
    );
    assert_eq!(cache.get("https://b.example").unwrap().status(), "offline");
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn test_keys_are_exact_urls() {
    let cache = ScanCache::default();
    cache.put("https://a.example/", ScanResult::error("boom"));

    assert!(cache.get("https://a.example").is_none());
    assert!(cache.get("https://a.example/").is_some());
}
