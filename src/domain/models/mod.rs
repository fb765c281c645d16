// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 风险评估（assessment）：风险等级与归一化后的评估结果
/// - 扫描结果（scan_result）：对外可见的扫描结果
/// - 消息（message）：内容侧发往协调侧的请求
pub mod assessment;
pub mod message;
pub mod scan_result;
