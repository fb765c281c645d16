// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::assessment::{RiskAssessment, RiskLevel};
use crate::utils::errors::ScanError;

/// 扫描结果
///
/// 对外可见的唯一结果类型，序列化为
/// `{ status: "ok"|"offline"|"error", assessment?, message? }`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ScanResult {
    /// 分类服务成功返回
    Ok { assessment: RiskAssessment },
    /// 无网络连接，使用上一次的评估或 `unknown`
    Offline {
        message: String,
        assessment: RiskAssessment,
    },
    /// 输入无效、上游状态码异常、传输失败或超时
    Error { message: String },
}

impl ScanResult {
    pub fn ok(assessment: RiskAssessment) -> Self {
        ScanResult::Ok { assessment }
    }

    /// 离线结果，消息固定
    pub fn offline(assessment: RiskAssessment) -> Self {
        ScanResult::Offline {
            message: ScanError::Offline.to_string(),
            assessment,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ScanResult::Error {
            message: message.into(),
        }
    }

    /// 状态字段的字符串形式
    pub fn status(&self) -> &'static str {
        match self {
            ScanResult::Ok { .. } => "ok",
            ScanResult::Offline { .. } => "offline",
            ScanResult::Error { .. } => "error",
        }
    }

    pub fn assessment(&self) -> Option<&RiskAssessment> {
        match self {
            ScanResult::Ok { assessment } | ScanResult::Offline { assessment, .. } => {
                Some(assessment)
            }
            ScanResult::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ScanResult::Ok { .. } => None,
            ScanResult::Offline { message, .. } | ScanResult::Error { message } => Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ScanResult::Error { .. })
    }

    /// 链接徽章上显示的文字
    pub fn badge_label(&self) -> &'static str {
        let level = self
            .assessment()
            .map(|a| a.risk_level)
            .unwrap_or(RiskLevel::Unknown);

        match level {
            RiskLevel::High => "High risk",
            RiskLevel::Medium => "Medium risk",
            RiskLevel::Low => "Low risk",
            RiskLevel::Unknown => match self {
                ScanResult::Offline { .. } => "Offline",
                _ => "Unknown",
            },
        }
    }
}

impl From<ScanError> for ScanResult {
    fn from(err: ScanError) -> Self {
        ScanResult::error(err.to_string())
    }
}
