// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 内容侧发往协调侧的消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanMessage {
    /// 请求扫描一个URL
    ScanUrl {
        #[serde(default)]
        url: String,
    },
    /// 其他类型的消息，协调侧会忽略
    #[serde(other)]
    Unknown,
}

impl ScanMessage {
    pub fn scan_url(url: impl Into<String>) -> Self {
        ScanMessage::ScanUrl { url: url.into() }
    }
}
