// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 远程分类服务模块
///
/// 定义风险分类调用的抽象接口以及基于reqwest的实现
pub mod reqwest_classifier;
pub mod traits;
