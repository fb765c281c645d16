// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::request_deduplicator::RequestDeduplicator;
use crate::infrastructure::connectivity::SharedConnectivity;
use crate::presentation::handlers::scan_handler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `deduplicator` - 扫描请求去重器
/// * `connectivity` - 连通性标志，用于健康检查
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(deduplicator: Arc<RequestDeduplicator>, connectivity: SharedConnectivity) -> Router {
    Router::new()
        .route("/health", get(scan_handler::health_check))
        .route("/v1/version", get(scan_handler::version))
        .route("/v1/scan", post(scan_handler::scan))
        .layer(Extension(deduplicator))
        .layer(Extension(connectivity))
        .layer(TraceLayer::new_for_http())
}
