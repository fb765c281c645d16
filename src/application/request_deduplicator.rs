// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt, Shared};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::application::channel::ScanChannel;
use crate::domain::models::message::ScanMessage;
use crate::domain::models::scan_result::ScanResult;

type PendingScan = Shared<BoxFuture<'static, ScanResult>>;

/// 请求去重器（single-flight）
///
/// 同一URL同一时间最多只有一个进行中的跨边界请求，期间到达的调用方
/// 共享同一个结果。请求结束后（无论成功或失败）立即删除挂起条目，
/// 然后再把结果分发给所有调用方。
pub struct RequestDeduplicator {
    channel: Arc<dyn ScanChannel>,
    pending: Arc<DashMap<String, PendingScan>>,
}

impl RequestDeduplicator {
    pub fn new(channel: Arc<dyn ScanChannel>) -> Self {
        Self {
            channel,
            pending: Arc::new(DashMap::new()),
        }
    }

    /// 扫描URL，永远返回一个结果
    pub async fn scan(&self, url: &str) -> ScanResult {
        if url.trim().is_empty() {
            return ScanResult::error("Invalid URL provided.");
        }

        let pending = match self.pending.entry(url.to_string()) {
            Entry::Occupied(entry) => {
                debug!(url, "Joining in-flight scan");
                counter!("scan_dedup_joined_total").increment(1);
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                let scan = self.dispatch(url.to_string());
                entry.insert(scan.clone());
                scan
            }
        };

        pending.await
    }

    /// 当前挂起的URL数量
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// 在独立任务中发起请求，调用方全部离开也会运行到结束
    fn dispatch(&self, url: String) -> PendingScan {
        let channel = Arc::clone(&self.channel);
        let guard = PendingGuard {
            pending: Arc::clone(&self.pending),
            url: url.clone(),
        };

        let task = tokio::spawn(async move {
            let _guard = guard;
            match channel.send(ScanMessage::scan_url(url.as_str())).await {
                Ok(result) => result,
                Err(err) => {
                    warn!(url = %url, error = %err, "Scan request failed at the boundary");
                    ScanResult::error(err.to_string())
                }
            }
        });

        async move {
            task.await.unwrap_or_else(|err| {
                error!(error = %err, "Scan task aborted");
                ScanResult::error("Unexpected failure")
            })
        }
        .boxed()
        .shared()
    }
}

/// 任务结束（包括panic）时删除挂起条目
struct PendingGuard {
    pending: Arc<DashMap<String, PendingScan>>,
    url: String,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.pending.remove(&self.url);
    }
}

#[cfg(test)]
#[path = "request_deduplicator_test.rs"]
mod tests;
