// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 缓存（cache）：扫描结果的内存缓存
/// - 连通性（connectivity）：网络在线状态查询
/// - 指标（metrics）：Prometheus导出器
pub mod cache;
pub mod connectivity;
pub mod metrics;
