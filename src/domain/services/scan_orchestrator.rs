// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::classifier::traits::RemoteClassifier;
use crate::config::settings::ScanOptions;
use crate::domain::models::assessment::RiskAssessment;
use crate::domain::models::message::ScanMessage;
use crate::domain::models::scan_result::ScanResult;
use crate::infrastructure::cache::scan_cache::{CacheLookup, ScanCache};
use crate::infrastructure::connectivity::ConnectivityOracle;
use crate::utils::errors::ScanError;
use crate::utils::url_utils::is_scannable_url;

/// 扫描编排器
///
/// 对单个URL依次尝试：输入校验、缓存命中、离线兜底、带超时的网络调用。
/// 除输入无效外，每个分支的结果都会写入缓存，包括错误和离线结果，
/// 这样在TTL窗口内不会对故障中的分类服务反复发起请求。
///
/// 每个进程创建一次，缓存随实例存在。
pub struct ScanOrchestrator {
    cache: ScanCache,
    classifier: Arc<dyn RemoteClassifier>,
    connectivity: Arc<dyn ConnectivityOracle>,
    timeout: Duration,
}

impl ScanOrchestrator {
    /// 创建新的扫描编排器
    ///
    /// # 参数
    ///
    /// * `classifier` - 远程分类服务
    /// * `connectivity` - 连通性查询
    /// * `options` - 超时与TTL配置
    pub fn new(
        classifier: Arc<dyn RemoteClassifier>,
        connectivity: Arc<dyn ConnectivityOracle>,
        options: &ScanOptions,
    ) -> Self {
        Self {
            cache: ScanCache::new(options.ttl),
            classifier,
            connectivity,
            timeout: options.timeout,
        }
    }

    pub fn cache(&self) -> &ScanCache {
        &self.cache
    }

    /// 解析一个URL的扫描结果，永远返回一个结果
    pub async fn resolve(&self, url: &str) -> ScanResult {
        if !is_scannable_url(url) {
            record_outcome("invalid");
            return ScanError::InvalidInput.into();
        }

        let previous = match self.cache.lookup(url) {
            CacheLookup::Fresh(result) => {
                debug!(url, status = result.status(), "Scan cache hit");
                record_outcome("cache_hit");
                return result;
            }
            CacheLookup::Stale(result) => result.assessment().cloned(),
            CacheLookup::Miss => None,
        };

        if self.connectivity.is_offline() {
            info!(url, "Offline, falling back to last known assessment");
            record_outcome("offline");
            return self.store(url, offline_result(url, previous));
        }

        let result = match self.classify_with_timeout(url).await {
            Ok(assessment) => {
                record_outcome("ok");
                ScanResult::ok(assessment)
            }
            Err(err) => {
                match &err {
                    ScanError::Timeout => warn!(
                        url,
                        kind = err.kind(),
                        timeout_ms = self.timeout.as_millis() as u64,
                        "Classifier timed out"
                    ),
                    ScanError::UpstreamStatus(code) => warn!(
                        url,
                        kind = err.kind(),
                        status_code = *code,
                        "Classifier returned non-success status"
                    ),
                    _ => warn!(url, kind = err.kind(), error = %err, "Classifier request failed"),
                }
                record_outcome(err.kind());

                match err {
                    ScanError::Timeout | ScanError::Transport(_)
                        if self.connectivity.is_offline() =>
                    {
                        info!(url, "Connectivity lost during classifier request");
                        offline_result(url, previous)
                    }
                    err => err.into(),
                }
            }
        };

        self.store(url, result)
    }

    /// 处理跨边界消息，未知类型的消息不回复
    pub async fn handle_message(&self, message: ScanMessage) -> Option<ScanResult> {
        match message {
            ScanMessage::ScanUrl { url } => Some(self.resolve(&url).await),
            ScanMessage::Unknown => {
                debug!("Ignoring unsupported message");
                None
            }
        }
    }

    /// 分类调用与超时竞争
    ///
    /// 超时先到时调用future在此处被丢弃，迟到的响应不会再写入缓存。
    async fn classify_with_timeout(&self, url: &str) -> Result<RiskAssessment, ScanError> {
        let exchange = async {
            let reply = self
                .classifier
                .classify(url)
                .await
                .map_err(|e| ScanError::Transport(e.to_string()))?;

            if !reply.is_success() {
                return Err(ScanError::UpstreamStatus(reply.status_code));
            }

            let payload = reply
                .json()
                .map_err(|e| ScanError::Transport(e.to_string()))?;
            Ok(RiskAssessment::from_payload(url, &payload))
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ScanError::Timeout),
        }
    }

    fn store(&self, url: &str, result: ScanResult) -> ScanResult {
        self.cache.put(url, result.clone());
        result
    }
}

/// 离线结果优先使用该URL上一次（已过期）的评估
fn offline_result(url: &str, previous: Option<RiskAssessment>) -> ScanResult {
    ScanResult::offline(previous.unwrap_or_else(|| RiskAssessment::unknown(url)))
}

fn record_outcome(outcome: &'static str) {
    counter!("scan_requests_total", "outcome" => outcome).increment(1);
}

#[cfg(test)]
#[path = "scan_orchestrator_test.rs"]
mod tests;
