// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 内容侧的请求入口：跨边界通道抽象，以及同一URL的请求去重
pub mod channel;
pub mod request_deduplicator;
