// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::models::scan_result::ScanResult;

/// 默认TTL：5分钟
pub const DEFAULT_SCAN_TTL: Duration = Duration::from_secs(300);

/// 缓存条目
#[derive(Debug, Clone)]
struct CacheEntry {
    recorded_at: Instant,
    result: ScanResult,
}

impl CacheEntry {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.recorded_at.elapsed() < ttl
    }
}

/// 带过期信息的查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    /// 未过期的结果
    Fresh(ScanResult),
    /// 已过期的结果，条目已被删除，但内容仍可作为兜底数据
    Stale(ScanResult),
    /// 无记录
    Miss,
}

/// 扫描结果缓存
///
/// 以URL为键保存最近一次的扫描结果。过期判断在读取时惰性进行，
/// 没有后台清理任务。进程重启即清空。
pub struct ScanCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl ScanCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 获取未过期的结果，过期条目会被顺带删除
    pub fn get(&self, url: &str) -> Option<ScanResult> {
        match self.lookup(url) {
            CacheLookup::Fresh(result) => Some(result),
            CacheLookup::Stale(_) | CacheLookup::Miss => None,
        }
    }

    /// 与 `get` 相同的淘汰语义，但会把过期条目的内容交给调用方
    pub fn lookup(&self, url: &str) -> CacheLookup {
        let entry = match self.entries.get(url) {
            Some(entry) => entry.value().clone(),
            None => return CacheLookup::Miss,
        };

        if entry.is_fresh(self.ttl) {
            return CacheLookup::Fresh(entry.result);
        }

        // Only drop the entry we judged stale; a concurrent put wins.
        let ttl = self.ttl;
        self.entries
            .remove_if(url, |_, current| !current.is_fresh(ttl));
        debug!(url, "Evicted stale scan cache entry");

        CacheLookup::Stale(entry.result)
    }

    /// 无条件覆盖，并记录当前时间
    pub fn put(&self, url: &str, result: ScanResult) {
        self.entries.insert(
            url.to_string(),
            CacheEntry {
                recorded_at: Instant::now(),
                result,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ScanCache {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_TTL)
    }
}
