// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含扫描的核心业务逻辑，包括：
/// - 领域模型（models）：风险评估、扫描结果和跨边界消息
/// - 服务（services）：扫描编排
pub mod models;
pub mod services;
