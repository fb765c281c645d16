// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 跨边界通道与请求去重
pub mod application;

/// 远程分类服务模块
pub mod classifier;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含扫描结果模型与扫描编排逻辑
pub mod domain;

/// 基础设施模块
///
/// 提供缓存、连通性和指标等技术实现
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应
pub mod presentation;

/// 工具模块
pub mod utils;

/// 工作器模块
///
/// 协调侧请求处理与连通性探测
pub mod workers;
