// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use thiserror::Error;

/// 分类调用错误类型
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// 请求失败
    #[error("{0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 响应体不是合法JSON
    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),
    /// 其他错误
    #[error("{0}")]
    Other(String),
}

/// 分类服务的原始响应
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierReply {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应体（仅在成功状态时解析）
    pub body: String,
}

impl ClassifierReply {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// 将响应体解析为JSON
    ///
    /// 只要是合法JSON就返回成功，字段层面的容错由归一化负责。
    pub fn json(&self) -> Result<serde_json::Value, ClassifierError> {
        serde_json::from_str(&self.body).map_err(|e| ClassifierError::InvalidPayload(e.to_string()))
    }
}

/// 远程风险分类接口
///
/// 实现只负责一次网络往返，超时由调用方统一施加。
#[async_trait]
pub trait RemoteClassifier: Send + Sync {
    /// 对URL发起分类请求
    ///
    /// # 参数
    ///
    /// * `url` - 待评估的URL
    ///
    /// # 返回值
    ///
    /// * `Ok(ClassifierReply)` - 收到任意HTTP响应
    /// * `Err(ClassifierError)` - 传输层失败
    async fn classify(&self, url: &str) -> Result<ClassifierReply, ClassifierError>;

    /// 分类器名称，用于日志
    fn name(&self) -> &'static str;
}
