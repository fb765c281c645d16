// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

use crate::domain::models::message::ScanMessage;
use crate::domain::models::scan_result::ScanResult;
use crate::domain::services::scan_orchestrator::ScanOrchestrator;
use crate::utils::errors::ChannelError;

/// 内容侧到协调侧的请求/回复通道
///
/// 回复在协调侧产出 `ScanResult` 之前不会结束。
#[async_trait]
pub trait ScanChannel: Send + Sync {
    async fn send(&self, message: ScanMessage) -> Result<ScanResult, ChannelError>;
}

/// 协调侧收到的一次请求
#[derive(Debug)]
pub struct ScanEnvelope {
    pub message: ScanMessage,
    /// `None` 表示协调侧不处理该消息
    pub reply: oneshot::Sender<Option<ScanResult>>,
}

/// 进程内通道：mpsc发送请求，oneshot接收回复
///
/// 整个往返受 `reply_timeout` 约束，调用方不会无限等待。
#[derive(Debug, Clone)]
pub struct LocalChannel {
    sender: mpsc::Sender<ScanEnvelope>,
    reply_timeout: Duration,
}

impl LocalChannel {
    /// 创建通道，返回发送端和交给 `CoordinatorWorker` 的接收端
    pub fn new(capacity: usize, reply_timeout: Duration) -> (Self, mpsc::Receiver<ScanEnvelope>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (
            Self {
                sender,
                reply_timeout,
            },
            receiver,
        )
    }

    async fn round_trip(&self, message: ScanMessage) -> Result<ScanResult, ChannelError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(ScanEnvelope { message, reply })
            .await
            .map_err(|_| ChannelError::Closed)?;

        match response.await {
            Ok(Some(result)) => Ok(result),
            Ok(None) => Err(ChannelError::EmptyResponse),
            Err(_) => Err(ChannelError::Internal(
                "Scan coordinator dropped the request".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ScanChannel for LocalChannel {
    async fn send(&self, message: ScanMessage) -> Result<ScanResult, ChannelError> {
        tokio::time::timeout(self.reply_timeout, self.round_trip(message))
            .await
            .map_err(|_| ChannelError::Timeout)?
    }
}

/// 同进程直连编排器，不经过队列
#[async_trait]
impl ScanChannel for ScanOrchestrator {
    async fn send(&self, message: ScanMessage) -> Result<ScanResult, ChannelError> {
        self.handle_message(message)
            .await
            .ok_or(ChannelError::EmptyResponse)
    }
}
