// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 未配置分类服务地址时使用的占位地址
pub const FALLBACK_ENDPOINT: &str = "https://api.phishsentry.invalid/scan";
/// 默认网络超时（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 4000;
/// 默认缓存TTL（毫秒）
pub const DEFAULT_TTL_MS: u64 = 300_000;
/// 跨边界等待在网络超时之外额外留出的余量（毫秒）
const REPLY_TIMEOUT_MARGIN_MS: u64 = 1000;

/// 应用程序配置设置
///
/// 包含分类服务、缓存、通道、连通性探测、服务器和指标等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 分类服务配置
    pub classifier: ClassifierSettings,
    /// 缓存配置
    pub cache: CacheSettings,
    /// 跨边界通道配置
    pub channel: ChannelSettings,
    /// 连通性探测配置
    pub connectivity: ConnectivitySettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 分类服务配置设置
#[derive(Debug, Deserialize)]
pub struct ClassifierSettings {
    /// 分类服务地址
    pub endpoint: String,
    /// Bearer令牌
    pub token: Option<String>,
    /// 请求超时时间（毫秒）
    pub timeout_ms: u64,
}

/// 缓存配置设置
#[derive(Debug, Deserialize)]
pub struct CacheSettings {
    /// 结果保留时间（毫秒）
    pub ttl_ms: u64,
}

/// 通道配置设置
#[derive(Debug, Deserialize)]
pub struct ChannelSettings {
    /// 等待协调侧回复的最长时间（毫秒），缺省为网络超时加余量
    pub reply_timeout_ms: Option<u64>,
    /// 请求队列容量
    pub queue_capacity: usize,
}

/// 连通性探测配置设置
#[derive(Debug, Deserialize)]
pub struct ConnectivitySettings {
    /// 探测地址，未设置时不启动探测
    pub probe_url: Option<String>,
    /// 探测间隔（秒）
    pub probe_interval_secs: u64,
    /// 单次探测超时（毫秒）
    pub probe_timeout_ms: u64,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 指标配置设置
#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用Prometheus导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen: String,
}

/// 扫描核心使用的配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// 分类服务地址
    pub endpoint: String,
    /// Bearer令牌
    pub token: Option<String>,
    /// 网络调用超时
    pub timeout: Duration,
    /// 缓存TTL
    pub ttl: Duration,
    /// 跨边界回复超时
    pub reply_timeout: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            endpoint: FALLBACK_ENDPOINT.to_string(),
            token: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            ttl: Duration::from_millis(DEFAULT_TTL_MS),
            reply_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS + REPLY_TIMEOUT_MARGIN_MS),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}`
    /// 以及 `PHISHSENTRY__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("PHISHSENTRY").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 仅包含默认值的构建器
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            // Default classifier settings
            .set_default("classifier.endpoint", FALLBACK_ENDPOINT)?
            .set_default("classifier.timeout_ms", DEFAULT_TIMEOUT_MS)?
            // Default cache settings
            .set_default("cache.ttl_ms", DEFAULT_TTL_MS)?
            // Default channel settings
            .set_default("channel.queue_capacity", 256)?
            // Default connectivity settings
            .set_default("connectivity.probe_interval_secs", 30)?
            .set_default("connectivity.probe_timeout_ms", 2000)?
            // Default server settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen", "0.0.0.0:9000")
    }

    /// 生成扫描核心使用的配置
    ///
    /// 空白的地址回落到占位地址，空白令牌视为未配置，超时为0时使用默认值
    pub fn scan_options(&self) -> ScanOptions {
        let endpoint = match self.classifier.endpoint.trim() {
            "" => FALLBACK_ENDPOINT.to_string(),
            trimmed => trimmed.to_string(),
        };

        let token = self
            .classifier
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let timeout_ms = match self.classifier.timeout_ms {
            0 => DEFAULT_TIMEOUT_MS,
            ms => ms,
        };

        let reply_timeout_ms = self
            .channel
            .reply_timeout_ms
            .unwrap_or(timeout_ms + REPLY_TIMEOUT_MARGIN_MS);

        ScanOptions {
            endpoint,
            token,
            timeout: Duration::from_millis(timeout_ms),
            ttl: Duration::from_millis(self.cache.ttl_ms),
            reply_timeout: Duration::from_millis(reply_timeout_ms),
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
