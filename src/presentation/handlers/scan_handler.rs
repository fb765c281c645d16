// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

use crate::application::request_deduplicator::RequestDeduplicator;
use crate::domain::models::message::ScanMessage;
use crate::infrastructure::connectivity::{ConnectivityOracle, SharedConnectivity};

/// 处理扫描请求
///
/// 请求体为 `{ "type": "SCAN_URL", "url": ... }`，经去重器转发给协调侧。
/// 扫描结果总是以200返回，结果类型由 `status` 字段区分。
pub async fn scan(
    Extension(deduplicator): Extension<Arc<RequestDeduplicator>>,
    Json(message): Json<ScanMessage>,
) -> Response {
    match message {
        ScanMessage::ScanUrl { url } => {
            let result = deduplicator.scan(&url).await;
            (StatusCode::OK, Json(result)).into_response()
        }
        ScanMessage::Unknown => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unsupported message type" })),
        )
            .into_response(),
    }
}

/// 健康检查端点
pub async fn health_check(Extension(connectivity): Extension<SharedConnectivity>) -> Response {
    Json(json!({
        "status": "ok",
        "offline": connectivity.is_offline(),
    }))
    .into_response()
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
