// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 扫描失败分类
///
/// 所有分支都会在编排器内部被恢复为 `ScanResult`，这里只用于
/// 生成调用方可见的消息以及日志/指标标签。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Invalid URL")]
    InvalidInput,

    #[error("No network connection. Using cached data if available.")]
    Offline,

    #[error("API responded with status {0}")]
    UpstreamStatus(u16),

    #[error("Request timeout")]
    Timeout,

    #[error("{0}")]
    Transport(String),
}

impl ScanError {
    /// 指标与日志使用的短标签
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::InvalidInput => "invalid",
            ScanError::Offline => "offline",
            ScanError::UpstreamStatus(_) => "upstream_status",
            ScanError::Timeout => "timeout",
            ScanError::Transport(_) => "transport",
        }
    }
}

/// 跨边界通道错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error("Scan coordinator is not running")]
    Closed,

    #[error("Request timeout")]
    Timeout,

    #[error("Empty response from background worker.")]
    EmptyResponse,

    #[error("{0}")]
    Internal(String),
}
