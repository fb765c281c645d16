// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// 模拟分类服务的行为
#[derive(Clone)]
pub struct MockBehavior {
    pub status: StatusCode,
    pub body: Value,
    pub delay: Duration,
}

impl MockBehavior {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: json!({ "detail": "Failed to compute score." }),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct MockState {
    behavior: MockBehavior,
    hits: Arc<AtomicUsize>,
}

/// 启动的模拟分类服务
pub struct MockClassifierServer {
    pub endpoint: String,
    hits: Arc<AtomicUsize>,
}

impl MockClassifierServer {
    pub async fn start(behavior: MockBehavior) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = MockState {
            behavior,
            hits: hits.clone(),
        };

        let app = Router::new()
            .route("/scan", post(score))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{}/scan", addr),
            hits,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn score(State(state): State<MockState>, Json(request): Json<Value>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if !state.behavior.delay.is_zero() {
        tokio::time::sleep(state.behavior.delay).await;
    }

    let mut body = state.behavior.body.clone();
    if let Value::Object(map) = &mut body {
        map.insert("requested".to_string(), json!(request["url"]));
    }
    (state.behavior.status, Json(body))
}
