// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 错误类型、日志初始化和URL校验
pub mod errors;
pub mod telemetry;
pub mod url_utils;
