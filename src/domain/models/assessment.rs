// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 风险等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    /// 宽松解析，无法识别的取值一律降级为 `Unknown`
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => RiskLevel::Low,
            "medium" => RiskLevel::Medium,
            "high" => RiskLevel::High,
            _ => RiskLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Unknown => "unknown",
        }
    }
}

/// 风险评估结果
///
/// 只通过归一化函数构造，构造后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// 被评估的URL
    pub url: String,
    /// 风险等级
    #[serde(default)]
    pub risk_level: RiskLevel,
    /// 风险分数
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// 判定原因
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// 给用户的处理建议
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<String>,
}

impl RiskAssessment {
    /// 无法判定时的兜底评估
    pub fn unknown(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            risk_level: RiskLevel::Unknown,
            score: None,
            reason: None,
            guidance: None,
        }
    }

    /// 将分类服务返回的任意JSON归一化为评估结果
    ///
    /// 评估字段可以位于顶层，也可以嵌套在 `assessment` 字段中。
    /// 任何类型不符的字段都会被丢弃，永远不会失败。
    pub fn from_payload(url: &str, payload: &Value) -> Self {
        let record = match payload {
            Value::Object(map) => match map.get("assessment") {
                Some(Value::Object(nested)) => nested,
                _ => map,
            },
            _ => return Self::unknown(url),
        };

        Self {
            url: url.to_string(),
            risk_level: record
                .get("riskLevel")
                .and_then(Value::as_str)
                .map(RiskLevel::parse_lenient)
                .unwrap_or_default(),
            score: record.get("score").and_then(Value::as_f64),
            reason: string_field(record, "reason"),
            guidance: string_field(record, "guidance"),
        }
    }
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}
