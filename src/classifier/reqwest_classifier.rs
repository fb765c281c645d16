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

use crate::classifier::traits::{ClassifierError, ClassifierReply, RemoteClassifier};
use crate::config::settings::ScanOptions;
use async_trait::async_trait;
use metrics::histogram;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use serde_json::json;
use std::time::Instant;
use tracing::debug;

/// 基于reqwest的分类服务客户端
///
/// `POST <endpoint>`，请求体为 `{ "url": ... }`，配置了令牌时附带
/// `Authorization: Bearer <token>`。
pub struct ReqwestClassifier {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl ReqwestClassifier {
    /// 创建新的分类服务客户端
    ///
    /// # 参数
    ///
    /// * `endpoint` - 分类服务地址
    /// * `token` - 可选的Bearer令牌
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Result<Self, ClassifierError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("phishsentry/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }

    /// 从扫描配置创建
    pub fn from_options(options: &ScanOptions) -> Result<Self, ClassifierError> {
        Self::new(options.endpoint.clone(), options.token.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteClassifier for ReqwestClassifier {
    async fn classify(&self, url: &str) -> Result<ClassifierReply, ClassifierError> {
        let mut request = self.client.post(&self.endpoint).json(&json!({ "url": url }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let start = Instant::now();
        let response = request.send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;
        histogram!("classifier_request_duration_seconds").record(start.elapsed().as_secs_f64());

        debug!(url, status_code, "Classifier responded");
        Ok(ClassifierReply { status_code, body })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_classifier_test.rs"]
mod tests;
