// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 协调侧请求处理循环与后台连通性探测
pub mod connectivity_worker;
pub mod coordinator_worker;
