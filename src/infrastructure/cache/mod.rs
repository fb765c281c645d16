// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 按URL保存扫描结果，读取时惰性判断过期
pub mod scan_cache;
