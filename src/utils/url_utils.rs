// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 判断字符串是否为可扫描的绝对URL
///
/// 空串、相对路径以及没有主机部分的URL（如 `mailto:`）都会被拒绝。
pub fn is_scannable_url(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }

    match Url::parse(trimmed) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
